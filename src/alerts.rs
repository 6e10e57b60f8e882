//! Hazard advisories.
//!
//! Two alert policies exist with different label vocabularies: snake_case
//! keyword tokens (`stagnant_water`) and model display names
//! (`Stagnant water`). Both resolve through [`HazardKind`] so their output
//! lines follow one fixed order.

use serde::Serialize;

pub const NO_HAZARDS_MESSAGE: &str = "No hazards detected.";

const KEYWORD_HEADER: &str = "⚠️ Hazards Identified:\n";
const KEYWORD_RECOMMENDATION: &str =
    "Recommended Action: Notify local health officers or emergency response team.";

pub const UNIDENTIFIED_HAZARD: &str = "Unidentified hazard detected.";
pub const CLASS_RECOMMENDATION: &str =
    "*Recommendation: Notify relevant municipal authorities for swift cleanup and mitigation.*";

/// Canonical hazard taxonomy, declared in alert order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum HazardKind {
    StagnantWater,
    Trash,
    BlockedDrain,
    Unknown,
}

impl HazardKind {
    pub const KNOWN: [HazardKind; 3] = [
        HazardKind::StagnantWater,
        HazardKind::Trash,
        HazardKind::BlockedDrain,
    ];

    /// Map a keyword token (`stagnant_water`, `waste_dump`, `blocked_drain`)
    pub fn from_keyword(token: &str) -> Self {
        match token {
            "stagnant_water" => HazardKind::StagnantWater,
            "waste_dump" => HazardKind::Trash,
            "blocked_drain" => HazardKind::BlockedDrain,
            _ => HazardKind::Unknown,
        }
    }

    /// Map a model display name (`Stagnant water`, `Trash`, `Blocked drain`)
    pub fn from_class_name(name: &str) -> Self {
        match name {
            "Stagnant water" => HazardKind::StagnantWater,
            "Trash" => HazardKind::Trash,
            "Blocked drain" => HazardKind::BlockedDrain,
            _ => HazardKind::Unknown,
        }
    }

    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            HazardKind::StagnantWater => Some("stagnant_water"),
            HazardKind::Trash => Some("waste_dump"),
            HazardKind::BlockedDrain => Some("blocked_drain"),
            HazardKind::Unknown => None,
        }
    }

    pub fn display_name(&self) -> Option<&'static str> {
        match self {
            HazardKind::StagnantWater => Some("Stagnant water"),
            HazardKind::Trash => Some("Trash"),
            HazardKind::BlockedDrain => Some("Blocked drain"),
            HazardKind::Unknown => None,
        }
    }

    /// Advisory line used by the keyword policy
    fn keyword_advisory(&self) -> Option<&'static str> {
        match self {
            HazardKind::StagnantWater => Some("- Stagnant water → High mosquito breeding risk."),
            HazardKind::Trash => Some("- Waste hotspot → Risk of cholera & infections."),
            HazardKind::BlockedDrain => Some("- Blocked drainage → Potential flooding."),
            HazardKind::Unknown => None,
        }
    }

    /// Risk sentence used by the class-name policy
    pub fn risk_sentence(&self) -> &'static str {
        match self {
            HazardKind::StagnantWater => "Potential breeding ground for mosquitoes and diseases.",
            HazardKind::Trash => "Risk of pollution, pests, and fire hazards.",
            HazardKind::BlockedDrain => "Risk of flooding and infrastructural damage.",
            HazardKind::Unknown => UNIDENTIFIED_HAZARD,
        }
    }
}

/// Keyword policy: one advisory per recognised token plus a closing line.
///
/// Unrecognised tokens produce no line. Duplicate tokens count once.
pub fn keyword_alert<I, S>(tokens: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut any = false;
    let mut kinds = Vec::new();
    for token in tokens {
        any = true;
        let kind = HazardKind::from_keyword(token.as_ref());
        if kind != HazardKind::Unknown && !kinds.contains(&kind) {
            kinds.push(kind);
        }
    }

    if !any {
        return NO_HAZARDS_MESSAGE.to_string();
    }

    kinds.sort();

    let mut msg = String::from(KEYWORD_HEADER);
    for kind in kinds {
        if let Some(line) = kind.keyword_advisory() {
            msg.push_str(line);
            msg.push('\n');
        }
    }
    msg.push('\n');
    msg.push_str(KEYWORD_RECOMMENDATION);
    msg
}

/// Class-name policy: one `- **name**: sentence` line per class, then the
/// recommendation. Names outside the mapping get the generic sentence.
pub fn class_alert<I, S>(class_names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut entries: Vec<(HazardKind, String)> = class_names
        .into_iter()
        .map(|name| {
            let name = name.as_ref();
            (HazardKind::from_class_name(name), name.to_string())
        })
        .collect();
    entries.sort();
    entries.dedup();

    let mut msg = String::new();
    for (kind, name) in entries {
        msg.push_str(&format!("- **{}**: {}\n", name, kind.risk_sentence()));
    }
    msg.push_str(CLASS_RECOMMENDATION);
    msg
}

/// Which alert policy renders a run's advisory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertStyle {
    /// Per-class markdown lines (`class_alert`)
    #[default]
    ClassName,
    /// Fixed advisory lines keyed by snake_case tokens (`keyword_alert`)
    Keyword,
}

/// Render the advisory for a set of detected class names.
///
/// The keyword style translates display names into keyword tokens through
/// `HazardKind`. Names with no token pass through unchanged, so
/// `keyword_alert` still sees a non-empty input and emits header and
/// closing line without an advisory for them.
pub fn compose_alert<'a, I>(style: AlertStyle, class_names: I) -> String
where
    I: IntoIterator<Item = &'a String>,
{
    let names: Vec<&String> = class_names.into_iter().collect();
    if names.is_empty() {
        return NO_HAZARDS_MESSAGE.to_string();
    }
    match style {
        AlertStyle::ClassName => class_alert(names),
        AlertStyle::Keyword => {
            let tokens: Vec<&str> = names
                .iter()
                .map(|name| {
                    HazardKind::from_class_name(name)
                        .keyword()
                        .unwrap_or(name.as_str())
                })
                .collect();
            keyword_alert(tokens)
        }
    }
}
