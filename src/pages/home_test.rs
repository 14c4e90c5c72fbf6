use super::*;

#[test]
fn next_slide_wraps_to_first() {
    assert_eq!(next_slide(0, 3), 1);
    assert_eq!(next_slide(2, 3), 0);
}

#[test]
fn previous_slide_wraps_to_last() {
    assert_eq!(previous_slide(1, 3), 0);
    assert_eq!(previous_slide(0, 3), 2);
}

#[test]
fn empty_slider_stays_at_zero() {
    assert_eq!(next_slide(0, 0), 0);
    assert_eq!(previous_slide(0, 0), 0);
}

#[test]
fn slides_are_the_three_announced_events() {
    let titles: Vec<_> = SLIDES.iter().map(|slide| slide.title).collect();
    assert_eq!(titles, ["Community Garden Meetup", "Spring Planting Festival", "Hydroponics Workshop"]);
    assert_eq!(SLIDES[2].button_text, "Register Now");
    assert_eq!(SLIDE_INTERVAL_MS, 5000);
}
