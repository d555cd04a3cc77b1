//! Snapshot tests for readers and renderers.
//!
//! These tests verify that parsing and rendering produce expected output.
//! Run `cargo insta review` to update snapshots after intentional changes.

use accessible_math::{Config, SemanticNode, Verbosity};

fn parse(input: &str) -> SemanticNode {
    accessible_math::parse(input).expect("parse failed")
}

// ============================================================================
// Reader Snapshots - verify tree shape
// ============================================================================

mod latex_reader {
    use super::*;
    use accessible_math::PlainTextRenderer;

    fn outline(node: &SemanticNode, depth: usize, out: &mut String) {
        out.push_str(&"  ".repeat(depth));
        out.push_str(node.node_type.name());
        if !node.content.is_empty() {
            out.push_str(&format!(" {:?}", node.content));
        }
        if let Some(role) = node.role() {
            out.push_str(&format!(" ({role})"));
        }
        out.push('\n');
        for child in node.children() {
            outline(child, depth + 1, out);
        }
    }

    fn tree(latex: &str) -> String {
        let mut out = String::new();
        outline(&parse(latex), 0, &mut out);
        out.trim_end().to_string()
    }

    #[test]
    fn quadratic_formula() {
        insta::assert_snapshot!(tree("x = \\frac{-b \\pm \\sqrt{b^2 - 4ac}}{2a}"), @r#"
        ROOT
          IDENTIFIER "x"
          RELATION "="
          FRACTION
            GROUP (numerator)
              OPERATOR "-"
              IDENTIFIER "b"
              OPERATOR "±"
              SQRT
                GROUP (radicand)
                  SUPERSCRIPT
                    IDENTIFIER "b" (base)
                    GROUP (exponent)
                      NUMBER "2"
                  OPERATOR "-"
                  NUMBER "4"
                  IDENTIFIER "a"
                  IDENTIFIER "c"
            GROUP (denominator)
              NUMBER "2"
              IDENTIFIER "a"
        "#);
    }

    #[test]
    fn summation_with_limits() {
        insta::assert_snapshot!(tree("\\sum_{i=1}^{n} i"), @r#"
        ROOT
          SUPERSCRIPT
            SUBSCRIPT (base)
              SUM "∑" (base)
              GROUP (subscript)
                IDENTIFIER "i"
                RELATION "="
                NUMBER "1"
            GROUP (exponent)
              IDENTIFIER "n"
          IDENTIFIER "i"
        "#);
    }

    #[test]
    fn plain_text_of_mixed_expression() {
        let tree = parse("\\sqrt[3]{x^2} + \\frac{1}{y_0}");
        insta::assert_snapshot!(PlainTextRenderer::emit(&tree), @"√[3](x^2) + (1)/(y_0)");
    }
}

#[cfg(feature = "read-mathml")]
mod mathml_reader {
    use super::*;
    use accessible_math::StructureEq;

    fn without_root_metadata(mut tree: SemanticNode) -> SemanticNode {
        tree.metadata.clear();
        tree
    }

    #[test]
    fn power_matches_latex() {
        let mathml = parse("<math><msup><mi>x</mi><mn>2</mn></msup></math>");
        let latex = parse("{x}^{2}");
        // The braced LaTeX base becomes the same role-tagged group.
        assert_eq!(mathml.children()[0].children()[0].role(), Some("base"));
        assert_eq!(latex.children()[0].children()[0].role(), Some("base"));
        let mathml = without_root_metadata(mathml);
        let latex = without_root_metadata(latex);
        assert!(mathml.structure_eq(&latex));
    }

    #[test]
    fn speech_of_mathml_fraction() {
        let tree = parse(
            r#"<math xmlns="http://www.w3.org/1998/Math/MathML">
                 <mfrac><mrow><mi>x</mi><mo>+</mo><mn>1</mn></mrow><mn>2</mn></mfrac>
               </math>"#,
        );
        let speech = accessible_math::SPEECH_RENDERER.speak(&tree, Verbosity::Verbose);
        insta::assert_snapshot!(speech, @"start fraction x plus 1 over 2 end fraction");
    }
}

// ============================================================================
// Renderer Snapshots - verify rendered text
// ============================================================================

mod speech_renderer {
    use super::*;
    use accessible_math::SPEECH_RENDERER;

    fn speak(latex: &str, verbosity: Verbosity) -> String {
        SPEECH_RENDERER.speak(&parse(latex), verbosity)
    }

    #[test]
    fn fraction_at_each_level() {
        let levels = [Verbosity::Verbose, Verbosity::Concise, Verbosity::Superbrief]
            .map(|level| format!("{level}: {}", speak("\\frac{a}{b}", level)))
            .join("\n");
        insta::assert_snapshot!(levels, @r"
        verbose: start fraction a over b end fraction
        concise: a over b
        superbrief: frac a b
        ");
    }

    #[test]
    fn power() {
        insta::assert_snapshot!(speak("x^2", Verbosity::Verbose), @"x to the power of 2");
    }

    #[test]
    fn quadratic_formula() {
        insta::assert_snapshot!(
            speak("x = \\frac{-b \\pm \\sqrt{b^2 - 4ac}}{2a}", Verbosity::Verbose),
            @"x equals start fraction minus b plus or minus square root of b to the power of 2 minus 4 a c end root over 2 a end fraction"
        );
    }

    #[test]
    fn nested_fraction_concise() {
        insta::assert_snapshot!(
            speak("\\frac{1}{1+\\frac{1}{x}}", Verbosity::Concise),
            @"1 over 1 plus 1 over x"
        );
    }

    #[test]
    fn greek_and_functions() {
        insta::assert_snapshot!(
            speak("\\sin \\theta \\neq \\Gamma_{n}", Verbosity::Verbose),
            @"sin theta not equal to capital gamma subscript n"
        );
    }

    #[test]
    fn integral() {
        insta::assert_snapshot!(
            speak("\\int_0^1 x \\, dx", Verbosity::Superbrief),
            @"int sub 0 exp 1 x d x"
        );
    }
}

mod nemeth_renderer {
    use super::*;
    use accessible_math::{NEMETH_RENDERER, Renderer};

    fn nemeth(latex: &str) -> String {
        NEMETH_RENDERER.render(&parse(latex), &Config::default())
    }

    #[test]
    fn number() {
        insta::assert_snapshot!(nemeth("12"), @"⠼⠂⠆");
    }

    #[test]
    fn pythagoras() {
        insta::assert_snapshot!(nemeth("a^2+b^2=c^2"), @"⠁⠘⠼⠆⠬⠃⠘⠼⠆⠀⠿⠀⠉⠘⠼⠆");
    }

    #[test]
    fn fraction_of_sum() {
        insta::assert_snapshot!(nemeth("\\frac{x+1}{2}"), @"⠹⠭⠬⠼⠂⠌⠼⠆⠼");
    }
}

mod ueb_renderer {
    use super::*;
    use accessible_math::{Renderer, UEB_RENDERER};

    fn ueb(latex: &str) -> String {
        UEB_RENDERER.render(&parse(latex), &Config::default())
    }

    #[test]
    fn pythagoras() {
        insta::assert_snapshot!(ueb("a^2+b^2=c^2"), @"⠁⠔⠼⠃⠬⠃⠔⠼⠃⠐⠶⠉⠔⠼⠃");
    }

    #[test]
    fn circle_area() {
        insta::assert_snapshot!(ueb("A = \\pi r^2"), @"⠠⠁⠐⠶⠨⠏⠗⠔⠼⠃");
    }
}
