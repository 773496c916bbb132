//! End-to-end behaviour of the page controller, driven only through
//! `Page::dispatch` the way the browser host drives it.

use std::time::Duration;

use electrotools_core::{
    Effect, Field, FieldError, Page, PageEvent, ScrollSnapshot, SectionBounds, SiteConfig,
    SubmitState, Visibility,
};
use pretty_assertions::assert_eq;

const HREFS: [&str; 4] = ["#a", "#b", "#testimonials", "#contact"];

fn page(testimonials: usize) -> Page {
    Page::new(SiteConfig::default(), HREFS, testimonials)
}

/// Play scheduled events back in order, like the browser's timers would.
fn run_timers(page: &mut Page, mut effects: Vec<Effect>) -> Vec<Duration> {
    let mut waited = Vec::new();
    while let Some(effect) = effects.pop() {
        if let Effect::Schedule { after, event } = effect {
            waited.push(after);
            effects.extend(page.dispatch(event));
        }
    }
    waited
}

fn active_indices(markers: &[bool]) -> Vec<usize> {
    markers
        .iter()
        .enumerate()
        .filter_map(|(i, on)| on.then_some(i))
        .collect()
}

#[test]
fn indicator_keeps_cards_and_dots_in_step() {
    let mut p = page(5);
    for i in [4, 0, 2, 2, 3] {
        p.dispatch(PageEvent::IndicatorSelected(i));
        let c = p.carousel().expect("carousel");
        assert_eq!(active_indices(c.cards()), vec![i]);
        assert_eq!(active_indices(c.dots()), vec![i]);
    }
}

#[test]
fn prev_and_next_wrap() {
    let mut p = page(5);
    p.dispatch(PageEvent::CarouselPrev);
    assert_eq!(p.carousel().map(|c| c.current()), Some(4));
    p.dispatch(PageEvent::CarouselNext);
    assert_eq!(p.carousel().map(|c| c.current()), Some(0));
}

#[test]
fn auto_advance_pauses_while_hidden() {
    let mut p = page(5);
    for _ in 0..3 {
        p.dispatch(PageEvent::CarouselTick(Visibility::Visible));
    }
    assert_eq!(p.carousel().map(|c| c.current()), Some(3));

    p.dispatch(PageEvent::CarouselTick(Visibility::Hidden));
    assert_eq!(p.carousel().map(|c| c.current()), Some(3));

    // no catch-up when the tab comes back
    p.dispatch(PageEvent::CarouselTick(Visibility::Visible));
    assert_eq!(p.carousel().map(|c| c.current()), Some(4));
}

#[test]
fn scroll_highlight_is_idempotent() {
    let mut p = page(0);
    let snapshot = ScrollSnapshot {
        scroll_y: 250.0,
        header_height: 0.0,
        sections: vec![
            SectionBounds::new("a", 0.0, 200.0),
            SectionBounds::new("b", 200.0, 300.0),
        ],
    };

    p.dispatch(PageEvent::Scrolled(snapshot.clone()));
    let first = p.links().clone();
    p.dispatch(PageEvent::Scrolled(snapshot.clone()));
    assert_eq!(p.links(), &first);
    assert_eq!(first.active_href(), Some("#b"));

    p.dispatch(PageEvent::Scrolled(ScrollSnapshot {
        scroll_y: 600.0,
        ..snapshot
    }));
    assert_eq!(p.links().active_href(), None);
}

#[test]
fn invalid_form_flags_only_the_empty_name() {
    let mut p = page(0);
    p.dispatch(PageEvent::FieldEdited {
        field: Field::Email,
        value: "a@b.com".into(),
    });
    p.dispatch(PageEvent::FieldEdited {
        field: Field::Message,
        value: "Do you stock 10mm conduit?".into(),
    });

    let effects = p.dispatch(PageEvent::FormSubmitted);
    assert!(effects.is_empty());

    let flagged: Vec<_> = Field::ALL
        .into_iter()
        .filter_map(|f| p.form().error(f).map(|e| (f, e)))
        .collect();
    assert_eq!(flagged, vec![(Field::Name, FieldError::MissingName)]);
    assert_eq!(p.form().state(), SubmitState::Idle);
    assert_eq!(p.form().value(Field::Email), "a@b.com");
}

#[test]
fn valid_form_runs_the_submit_sequence_and_clears() {
    let mut p = page(0);
    for (field, value) in [
        (Field::Name, "Dana"),
        (Field::Email, "dana@example.com"),
        (Field::Message, "Quote for 20 drills please"),
    ] {
        p.dispatch(PageEvent::FieldEdited {
            field,
            value: value.into(),
        });
    }

    let effects = p.dispatch(PageEvent::FormSubmitted);
    assert_eq!(p.submit_label(), "Sending...");
    assert!(p.form().button_disabled());

    let waited = run_timers(&mut p, effects);
    assert_eq!(
        waited,
        vec![Duration::from_millis(1500), Duration::from_millis(2000)]
    );
    assert!(p.form().fields().is_empty());
    assert_eq!(p.form().state(), SubmitState::Idle);
    assert_eq!(p.submit_label(), "Send Message");
    assert!(!p.form().button_disabled());
}

#[test]
fn form_is_cleared_while_sent_label_shows() {
    let mut p = page(0);
    for field in Field::ALL {
        let value = if field == Field::Email { "x@y.io" } else { "x" };
        p.dispatch(PageEvent::FieldEdited {
            field,
            value: value.into(),
        });
    }
    p.dispatch(PageEvent::FormSubmitted);
    let next = p.dispatch(PageEvent::SubmissionAdvanced);
    assert_eq!(p.submit_label(), "Message Sent!");
    assert!(p.form().fields().is_empty());
    assert_eq!(
        next,
        vec![Effect::Schedule {
            after: Duration::from_millis(2000),
            event: PageEvent::SubmissionAdvanced,
        }]
    );
}

#[test]
fn config_drives_timings() {
    let config = SiteConfig::from_toml_str(
        r#"
[contact]
sending_ms = 10
sent_ms = 20
submit_label = "Send"

[highlight]
lookahead = 0.0
"#,
    )
    .expect("config");
    let mut p = Page::new(config, HREFS, 0);
    assert_eq!(p.submit_label(), "Send");

    for field in Field::ALL {
        let value = if field == Field::Email { "x@y.io" } else { "x" };
        p.dispatch(PageEvent::FieldEdited {
            field,
            value: value.into(),
        });
    }
    let effects = p.dispatch(PageEvent::FormSubmitted);
    let waited = run_timers(&mut p, effects);
    assert_eq!(
        waited,
        vec![Duration::from_millis(10), Duration::from_millis(20)]
    );

    // zero lookahead: section b only counts from its real top
    p.dispatch(PageEvent::Scrolled(ScrollSnapshot {
        scroll_y: 150.0,
        header_height: 0.0,
        sections: vec![
            SectionBounds::new("a", 0.0, 200.0),
            SectionBounds::new("b", 200.0, 300.0),
        ],
    }));
    assert_eq!(p.links().active_href(), Some("#a"));
}
