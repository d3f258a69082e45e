//! Prompt Builder: renders the parent → child reconciliation instructions.
//!
//! Pure string interpolation. Inputs are not validated and are inserted verbatim;
//! the reconciliation itself is left entirely to the model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::llm_client::prompts::render_template;
use crate::taxonomy::prompts::{
    DROP_IRRELEVANT_DECISION, DROP_IRRELEVANT_NOTE, DROP_IRRELEVANT_RULE, GENERALIZE_DECISION,
    GENERALIZE_NOTE, GENERALIZE_RULE, RECONCILE_PROMPT_TEMPLATE,
};

/// How the model should treat parent attributes that do not apply to the child item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptProfile {
    /// Omit irrelevant parent attributes.
    #[default]
    DropIrrelevant,
    /// Keep every parent key; irrelevant ones get a category-aware generic value.
    Generalize,
}

impl PromptProfile {
    pub fn as_str(self) -> &'static str {
        match self {
            PromptProfile::DropIrrelevant => "drop_irrelevant",
            PromptProfile::Generalize => "generalize",
        }
    }

    fn fragments(self) -> (&'static str, &'static str, &'static str) {
        match self {
            PromptProfile::DropIrrelevant => (
                DROP_IRRELEVANT_DECISION,
                DROP_IRRELEVANT_NOTE,
                DROP_IRRELEVANT_RULE,
            ),
            PromptProfile::Generalize => (GENERALIZE_DECISION, GENERALIZE_NOTE, GENERALIZE_RULE),
        }
    }
}

impl fmt::Display for PromptProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PromptProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "drop_irrelevant" | "drop" => Ok(PromptProfile::DropIrrelevant),
            "generalize" | "generalise" => Ok(PromptProfile::Generalize),
            other => Err(format!(
                "unknown prompt profile '{other}' (expected 'drop_irrelevant' or 'generalize')"
            )),
        }
    }
}

/// Everything interpolated into the reconciliation prompt.
#[derive(Debug, Clone, Copy)]
pub struct PromptInputs<'a> {
    pub hs_code: &'a str,
    pub domain: &'a str,
    pub item_description: &'a str,
    /// Parent attribute JSON text, passed through unparsed.
    pub reference_attributes: &'a str,
}

pub fn build_reconciliation_prompt(profile: PromptProfile, inputs: &PromptInputs<'_>) -> String {
    let (irrelevant_decision, profile_note, irrelevant_rule) = profile.fragments();
    render_template(
        RECONCILE_PROMPT_TEMPLATE,
        &[
            ("hs_code", inputs.hs_code),
            ("domain", inputs.domain),
            ("item_description", inputs.item_description),
            ("reference_attributes", inputs.reference_attributes),
            ("irrelevant_decision", irrelevant_decision),
            ("profile_note", profile_note),
            ("irrelevant_rule", irrelevant_rule),
        ],
    )
}
