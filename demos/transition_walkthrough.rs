//! Walks a small stack through push, modal and pop on both platform families
//! and prints which transition each step gets.
//!
//! Run with `RUST_LOG=trace` to see the selector's decisions, and set
//! `STACK_TRANSITIONS_RUNTIME_VERSION=0.44` to see the bezier fallback.

use stack_transitions::prelude::*;

fn describe(config: &TransitionConfig) -> String {
    let timing = match &config.transition_spec {
        TransitionSpec::Spring(spring) => format!(
            "spring(stiffness {}, damping {}, mass {})",
            spring.stiffness, spring.damping, spring.mass
        ),
        TransitionSpec::Timing(transition) => {
            format!("{}ms {:?}", transition.duration_ms, transition.timing)
        }
    };
    let background = config
        .container_style
        .and_then(|style| style.background_color)
        .map(|c| format!("rgba({:.2}, {:.2}, {:.2}, {:.2})", c.r, c.g, c.b, c.a))
        .unwrap_or_else(|| "none".to_string());
    format!(
        "{timing}, interpolator {}, background {background}",
        config.screen_interpolator.name()
    )
}

fn main() {
    env_logger::init();

    let catalog = TransitionCatalog::global();
    let home = TransitionState::with_route(0, "home");
    let detail = TransitionState::with_route(1, "detail");
    let sheet = TransitionState::with_route(2, "sheet");

    let steps = [
        ("open home", TransitionRequest::new(&home)),
        ("push detail", TransitionRequest::new(&detail).previous(&home)),
        (
            "present sheet",
            TransitionRequest::new(&sheet).previous(&detail).modal(true),
        ),
        (
            "present transparent sheet",
            TransitionRequest::new(&sheet)
                .previous(&detail)
                .modal(true)
                .transparent(true),
        ),
        ("pop to home", TransitionRequest::new(&home).previous(&detail)),
    ];

    let slow_pops = |current: &TransitionState<&'static str>,
                     previous: Option<&TransitionState<&'static str>>,
                     _: bool| {
        let popping = previous.is_some_and(|previous| current.is_back_from(previous));
        if popping {
            TransitionConfigOverlay::new()
                .transition_spec(TransitionSpec::timing(400.0, TimingFunction::EaseOut))
        } else {
            TransitionConfigOverlay::new()
        }
    };
    let configurer: &dyn TransitionConfigurer<&'static str> = &slow_pops;

    for platform in [Platform::Ios, Platform::Android] {
        let selector = TransitionSelector::new(catalog, platform);
        println!("== {platform}");
        for (label, request) in &steps {
            let preset = selector.select(request);
            let resolved = selector.resolve_config(Some(configurer), request);
            println!("  {label:<26} {preset:<20} {}", describe(&resolved));
        }
    }
}
