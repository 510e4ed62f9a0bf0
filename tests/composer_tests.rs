//! Library-level tests for composing cards end to end.

use gradient_card::accessibility::{
    ActivationEvent, CardHandlers, FocusEvent, KeyEvent, PointerEvent,
};
use gradient_card::boundary::{BoundaryOutput, CardBoundary};
use gradient_card::color::{ColorResolver, ComputedResolver, PatternResolver};
use gradient_card::compose::{CardComposer, ContentSlot};
use gradient_card::diagnostics::{DiagnosticKind, MemoryReporter};
use gradient_card::models::{CardProps, PropValue};
use gradient_card::presets::{AnimationPreset, ShadowPreset};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

fn scenario_props() -> CardProps {
    CardProps::new("Card body")
        .gradient("#ff0000", "#0000ff")
        .border_width(5.0)
        .border_radius("1rem")
        .padding("1rem")
        .background("white")
        .shadow("small")
        .animated("scale")
}

fn composer(resolver: Arc<dyn ColorResolver>) -> (CardComposer, Arc<MemoryReporter>) {
    let reporter = Arc::new(MemoryReporter::new());
    (CardComposer::new(resolver, reporter.clone()), reporter)
}

#[test]
fn test_scenario_matches_under_both_resolvers() {
    let resolvers: [Arc<dyn ColorResolver>; 2] =
        [Arc::new(ComputedResolver), Arc::new(PatternResolver)];

    for resolver in resolvers {
        let (composer, reporter) = composer(resolver);
        let card = composer.compose(&scenario_props(), &CardHandlers::default());

        let outer = &card.styles.outer_frame;
        assert_eq!(outer.background, "linear-gradient(135deg, #ff0000, #0000ff)");
        assert_eq!(outer.padding, "5px");
        assert_eq!(outer.border_radius, "1rem");
        assert_eq!(outer.box_shadow.as_deref(), Some(ShadowPreset::Small.value()));

        let inner = &card.styles.inner_surface;
        assert_eq!(inner.border_radius, "calc(1rem - 5px)");
        assert_eq!(inner.padding, "1rem");
        assert_eq!(inner.background, "white");

        assert_eq!(card.animation, AnimationPreset::Scale.value());
        assert!(reporter.is_empty(), "unexpected diagnostics: {:?}", reporter.entries());
    }
}

#[test]
fn test_broken_props_fall_back_with_diagnostics() {
    let (composer, reporter) = composer(Arc::new(ComputedResolver));
    let props = CardProps::default()
        .gradient("invalid-color", PropValue::Undefined)
        .border_width(100.0)
        .border_radius("invalid-radius");

    let card = composer.compose(&props, &CardHandlers::default());

    assert_eq!(card.props.gradient_from, "#ff6ec7");
    assert!((card.props.border_width - 50.0).abs() < f64::EPSILON);
    assert_eq!(card.props.border_radius, "1rem");
    assert_eq!(card.styles.outer_frame.padding, "50px");
    assert_eq!(reporter.count(DiagnosticKind::InvalidInput), 2);
    assert_eq!(reporter.count(DiagnosticKind::Clamped), 1);
}

#[test]
fn test_non_finite_border_width_uses_default() {
    let (composer, reporter) = composer(Arc::new(ComputedResolver));
    let card = composer.compose(
        &CardProps::default().border_width(f64::NAN),
        &CardHandlers::default(),
    );

    assert_eq!(card.styles.outer_frame.padding, "2px");
    assert_eq!(reporter.count(DiagnosticKind::InvalidInput), 1);
    assert_eq!(reporter.count(DiagnosticKind::Clamped), 0);
}

#[test]
fn test_empty_content_gets_placeholder() {
    let composer = CardComposer::default();

    let card = composer.compose(&CardProps::default(), &CardHandlers::default());
    match card.content {
        ContentSlot::Placeholder { text, role, aria_live, .. } => {
            assert_eq!(text, "No content");
            assert_eq!(role, "status");
            assert_eq!(aria_live, "polite");
        }
        ContentSlot::Present(value) => panic!("expected placeholder, got {value:?}"),
    }

    for present in [PropValue::from(""), PropValue::Number(0.0), PropValue::Bool(false)] {
        let card = composer.compose(&CardProps::new(present.clone()), &CardHandlers::default());
        assert_eq!(card.content, ContentSlot::Present(present));
    }
}

#[test]
fn test_keyboard_activation_flow() {
    let activations = Arc::new(Mutex::new(Vec::new()));
    let forwarded = Arc::new(AtomicUsize::new(0));

    let handlers = {
        let activations = activations.clone();
        let forwarded = forwarded.clone();
        CardHandlers::default()
            .on_click(move |event| {
                let source = match event {
                    ActivationEvent::Pointer(_) => "pointer",
                    ActivationEvent::Keyboard(_) => "keyboard",
                };
                activations
                    .lock()
                    .unwrap_or_else(std::sync::PoisonError::into_inner)
                    .push(source);
            })
            .on_key_down(move |_| {
                forwarded.fetch_add(1, Ordering::SeqCst);
            })
    };

    let card =
        CardComposer::default().compose(&CardProps::new("Open").interactive(true), &handlers);
    let attrs = &card.accessibility;

    assert_eq!(attrs.role, "button");
    assert_eq!(attrs.aria_label, "Interactive gradient border card");
    assert_eq!(attrs.tab_index, Some(0));
    assert!(card.class_name.contains("focus:ring-2"));

    let mut enter = KeyEvent::new("Enter");
    attrs.key_down(&mut enter);
    assert!(enter.is_default_prevented());

    let mut space = KeyEvent::new(" ");
    attrs.key_down(&mut space);
    assert!(space.is_default_prevented());

    let mut tab = KeyEvent::new("Tab");
    attrs.key_down(&mut tab);
    assert!(!tab.is_default_prevented());

    attrs.click(&PointerEvent { x: 1.0, y: 2.0 });
    attrs.focus(&FocusEvent::default());

    let seen = activations
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
        .clone();
    assert_eq!(seen, vec!["keyboard", "keyboard", "pointer"]);
    assert_eq!(forwarded.load(Ordering::SeqCst), 3);
}

#[test]
fn test_static_card_is_not_focusable() {
    let card =
        CardComposer::default().compose(&CardProps::new("Read me"), &CardHandlers::default());
    assert_eq!(card.accessibility.role, "region");
    assert_eq!(card.accessibility.aria_label, "Gradient border card");
    assert!(!card.accessibility.is_focusable());

    let json = serde_json::to_value(&card.accessibility).unwrap();
    assert_eq!(json["role"], "region");
    assert!(json.get("tabIndex").is_none());
}

#[test]
fn test_boundary_recovers_after_reset() {
    let composer = CardComposer::default();
    let mut boundary = CardBoundary::new();
    let fail = std::cell::Cell::new(true);

    let render = || {
        assert!(!fail.get(), "content failed to load");
        composer.compose(&scenario_props(), &CardHandlers::default())
    };

    let BoundaryOutput::Failed(notice) = boundary.render(render) else {
        panic!("expected failure notice");
    };
    assert!(notice.detail.contains("content failed to load"));

    fail.set(false);
    assert!(boundary.render(render).rendered().is_none(), "failure is held until reset");

    boundary.reset();
    let card = boundary.render(render).rendered().expect("renders after reset");
    assert_eq!(card.styles.outer_frame.padding, "5px");
}

#[test]
fn test_composer_is_deterministic_with_cache() {
    let reporter = Arc::new(MemoryReporter::new());
    let cached = CardComposer::new(Arc::new(ComputedResolver), reporter).with_cache(8);
    let uncached = CardComposer::default();

    let first = cached.compose(&scenario_props(), &CardHandlers::default());
    let second = cached.compose(&scenario_props(), &CardHandlers::default());
    let fresh = uncached.compose(&scenario_props(), &CardHandlers::default());

    assert_eq!(first.styles, second.styles);
    assert_eq!(first.styles, fresh.styles);
    assert_eq!(first.class_name, fresh.class_name);

    let stats = cached.cache_stats().expect("cache enabled");
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
}
