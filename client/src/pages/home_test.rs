use super::*;
use crate::state::docs::find_section;

#[test]
fn docs_deep_link_formats_query() {
    assert_eq!(docs_deep_link("quickstart"), "/docs?section=quickstart");
}

#[test]
fn quick_steps_link_to_catalog_sections() {
    for step in QUICK_STEPS {
        assert!(find_section(step.section).is_some(), "{} is not a section", step.section);
    }
}
