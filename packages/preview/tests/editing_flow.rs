use tandem_catalog::TemplateKind;
use tandem_preview::{Preview, RegionMode, RenderOutcome};

#[test]
fn test_text_edit_round_trip_keeps_the_live_tree() {
    let mut preview = Preview::new();
    preview.render("metric overview");

    let region = preview.region_mut("header.title").unwrap();
    region.click();
    region.input("Admin Panel");
    let commit = region.commit().unwrap();

    let patched = preview.handle_edit(&commit).unwrap();
    assert!(patched.contains("Admin Panel"));

    // The patched code still reads as a dashboard ("metric" survives the
    // replacement), so re-rendering it must not remount the tree.
    preview.render(&patched);
    assert_eq!(preview.current_kind(), Some(TemplateKind::Dashboard));
    assert_eq!(preview.generation(), 1);
    assert_eq!(preview.region("header.title").unwrap().value(), "Admin Panel");
}

#[test]
fn test_successive_commits_do_not_accumulate_in_code() {
    let mut preview = Preview::new();
    preview.render("metric overview");

    let region = preview.region_mut("header.title").unwrap();
    region.click();
    region.input("Admin Panel");
    let first = region.commit().unwrap();
    let patched_first = preview.handle_edit(&first).unwrap();
    assert!(patched_first.contains("Admin Panel"));

    let region = preview.region_mut("header.button").unwrap();
    region.click();
    region.input("Deploy");
    let second = region.commit().unwrap();
    let patched_second = preview.handle_edit(&second).unwrap();

    // Each commit patches the pristine canonical source. The second edit
    // lands alone; the first lives on only in its region's display value.
    assert!(patched_second.contains("Deploy"));
    assert!(!patched_second.contains("Admin Panel"));
    assert_eq!(preview.region("header.title").unwrap().value(), "Admin Panel");
}

#[test]
fn test_style_flow_injects_on_every_class_attribute() {
    let mut preview = Preview::new();
    preview.render("product price card");

    let region = preview.region_mut("card.button").unwrap();
    region.shift_click();
    assert_eq!(region.mode(), &RegionMode::EditingStyle);

    let commit = region.submit_style("backgroundColor", "#16A34A").unwrap();
    assert_eq!(commit.path, "card.button.style.backgroundColor");

    let patched = preview.handle_edit(&commit).unwrap();
    let attrs = patched.matches("className=\"").count();
    let injected = patched
        .matches("style={{backgroundColor: \"#16A34A\"}}")
        .count();
    assert_eq!(injected, attrs);
}

#[test]
fn test_unstyled_region_shift_click_falls_back_to_text() {
    let mut preview = Preview::new();
    preview.render("contact input");

    let region = preview.region_mut("form.nameLabel").unwrap();
    region.shift_click();
    assert!(matches!(region.mode(), RegionMode::EditingText { .. }));
    region.cancel();
}

#[test]
fn test_escape_leaves_code_untouched() {
    let mut preview = Preview::new();
    preview.render("metric overview");

    let region = preview.region_mut("metrics.0.label").unwrap();
    region.click();
    region.input("Sessions");
    region.cancel();

    assert_eq!(region.value(), "Total Users");
    assert!(matches!(preview.outcome(), RenderOutcome::Tree(_)));
}
