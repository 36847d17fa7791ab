// SPDX-License-Identifier: MPL-2.0
//! Prompt composition for the generation request.
//!
//! The remote model is known to hallucinate lettering into icons, so the
//! composed prompt carries an emphatic no-text constraint both before and
//! after the subject description. Wording is a policy choice; the
//! before-and-after placement is not.

/// Leading constraint forbidding any typography in the result.
pub const NO_TEXT_CONSTRAINT: &str = "STRICTLY NO TEXT. NO LETTERS. NO WORDS. \
     NO TYPOGRAPHY. NO CHARACTERS. NO NUMBERS. ABSOLUTELY NO WRITING OR CAPTIONS.";

/// Fixed quality and isolation constraint appended after the style fragment.
pub const QUALITY_CONSTRAINT: &str = "Professional digital asset, high-end design, \
     centered, isolated on plain white background, sharp edges, 8k resolution, \
     masterpiece quality.";

/// Trailing reminder of the no-text constraint.
pub const NO_TEXT_REMINDER: &str = "ZERO TEXT ALLOWED.";

/// Builds the final request text from the user's description and the selected
/// style's prompt fragment.
///
/// The caller is responsible for rejecting empty descriptions; `compose` does
/// not trim or sanitize beyond simple embedding.
#[must_use]
pub fn compose(user_text: &str, style_suffix: &str) -> String {
    format!(
        "{NO_TEXT_CONSTRAINT} A professional icon of {user_text}. {style_suffix}. \
         {QUALITY_CONSTRAINT} {NO_TEXT_REMINDER}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::IconStyle;

    #[test]
    fn compose_embeds_user_text_verbatim() {
        let prompt = compose("a robotic hummingbird", IconStyle::SoftClay.prompt_suffix());
        assert!(prompt.contains("a robotic hummingbird"));
    }

    #[test]
    fn compose_embeds_style_suffix() {
        let prompt = compose("a robotic hummingbird", IconStyle::SoftClay.prompt_suffix());
        assert!(prompt.contains("claymorphism style"));
    }

    #[test]
    fn no_text_constraint_precedes_and_follows_subject() {
        let prompt = compose("an origami fox", IconStyle::PremiumFlat.prompt_suffix());
        let subject = prompt.find("an origami fox").expect("subject present");
        let leading = prompt.find("NO TEXT").expect("leading constraint present");
        let trailing = prompt.rfind("ZERO TEXT").expect("trailing reminder present");
        assert!(leading < subject);
        assert!(trailing > subject);
    }

    #[test]
    fn compose_includes_quality_constraint() {
        let prompt = compose("a compass rose", IconStyle::CyberNeon.prompt_suffix());
        assert!(prompt.contains(QUALITY_CONSTRAINT));
    }

    #[test]
    fn compose_is_deterministic() {
        let a = compose("a paper plane", IconStyle::MinimalStroke.prompt_suffix());
        let b = compose("a paper plane", IconStyle::MinimalStroke.prompt_suffix());
        assert_eq!(a, b);
    }
}
