use safehealth::alerts::{
    AlertStyle, CLASS_RECOMMENDATION, NO_HAZARDS_MESSAGE, UNIDENTIFIED_HAZARD, compose_alert,
};
use safehealth::{class_alert, keyword_alert};
use std::collections::BTreeSet;

#[test]
fn test_keyword_policy_empty_input() {
    let none: Vec<&str> = Vec::new();
    assert_eq!(keyword_alert(none), "No hazards detected.");
}

#[test]
fn test_keyword_policy_full_message() {
    let msg = keyword_alert(["waste_dump", "stagnant_water", "blocked_drain"]);
    assert_eq!(
        msg,
        "⚠️ Hazards Identified:\n\
         - Stagnant water → High mosquito breeding risk.\n\
         - Waste hotspot → Risk of cholera & infections.\n\
         - Blocked drainage → Potential flooding.\n\
         \n\
         Recommended Action: Notify local health officers or emergency response team."
    );
}

#[test]
fn test_keyword_policy_ignores_unknown_tokens() {
    let msg = keyword_alert(["pothole", "waste_dump", "waste_dump"]);
    assert_eq!(msg.matches("Waste hotspot").count(), 1);
    assert!(!msg.contains("pothole"));

    // Only unknown tokens: header and closing line, no advisories
    let msg = keyword_alert(["pothole"]);
    assert!(msg.starts_with("⚠️ Hazards Identified:\n"));
    assert!(!msg.contains("- "));
    assert!(msg.ends_with("emergency response team."));
}

#[test]
fn test_class_policy_known_classes() {
    let msg = class_alert(["Trash", "Stagnant water"]);
    assert_eq!(
        msg,
        "- **Stagnant water**: Potential breeding ground for mosquitoes and diseases.\n\
         - **Trash**: Risk of pollution, pests, and fire hazards.\n\
         *Recommendation: Notify relevant municipal authorities for swift cleanup and mitigation.*"
    );
}

#[test]
fn test_class_policy_unknown_names_fall_back() {
    for name in ["Pothole", "stagnant_water", "", "trash", "Blocked Drain"] {
        let msg = class_alert([name]);
        assert!(
            msg.contains(&format!("- **{}**: {}", name, UNIDENTIFIED_HAZARD)),
            "expected fallback for {:?}, got {:?}",
            name,
            msg
        );
        assert!(msg.ends_with(CLASS_RECOMMENDATION));
    }
}

#[test]
fn test_class_policy_order_is_reproducible() {
    let a = class_alert(["Pothole", "Blocked drain", "Trash"]);
    let b = class_alert(["Trash", "Pothole", "Blocked drain"]);
    assert_eq!(a, b);

    // Known kinds first, unknown classes last
    assert!(a.find("Trash").unwrap() < a.find("Blocked drain").unwrap());
    assert!(a.find("Blocked drain").unwrap() < a.find("Pothole").unwrap());
}

#[test]
fn test_compose_alert_styles() {
    let hazards: BTreeSet<String> = ["Stagnant water", "Pothole"]
        .into_iter()
        .map(String::from)
        .collect();

    let keyword = compose_alert(AlertStyle::Keyword, &hazards);
    assert!(keyword.contains("High mosquito breeding risk"));
    assert!(!keyword.contains("Pothole"));

    let class = compose_alert(AlertStyle::ClassName, &hazards);
    assert!(class.contains("- **Pothole**: Unidentified hazard detected."));

    let empty = BTreeSet::new();
    assert_eq!(compose_alert(AlertStyle::ClassName, &empty), NO_HAZARDS_MESSAGE);
    assert_eq!(compose_alert(AlertStyle::Keyword, &empty), NO_HAZARDS_MESSAGE);
}

#[test]
fn test_keyword_style_with_only_unmapped_classes_still_alerts() {
    let hazards: BTreeSet<String> = ["Pothole".to_string()].into_iter().collect();

    let msg = compose_alert(AlertStyle::Keyword, &hazards);
    assert_ne!(msg, NO_HAZARDS_MESSAGE);
    assert!(msg.starts_with("⚠️ Hazards Identified:"));
    assert!(msg.ends_with("emergency response team."));
    assert!(!msg.contains("Pothole"));
}
