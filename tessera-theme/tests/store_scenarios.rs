use std::sync::Arc;

use parking_lot::Mutex;
use tessera_theme::{
    ColorRole, CssStyleSurface, CustomColor, StoreEvent, StoreOptions, ThemeError, ThemeMode,
    ThemeStore, TokenMap, Variant, build_theme, project_tokens,
};

const SEED: &str = "#006494";

fn is_hex6(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[test]
fn tonal_spot_seed_end_to_end() {
    let theme = build_theme(0x006494, Variant::TonalSpot, 0.0, &[]).unwrap();
    assert_eq!(theme.source.value(), 0x006494);
    assert_eq!(theme.variant, Variant::TonalSpot);
    assert!(theme.custom_colors.is_empty());

    let light = project_tokens(&theme, ThemeMode::Light);
    let primary = light.get("primary").unwrap();
    let on_primary = light.get("on-primary").unwrap();
    assert!(is_hex6(&primary));
    assert!(is_hex6(&on_primary));
    assert_ne!(primary, on_primary);
}

#[test]
fn every_variant_yields_every_token_in_both_modes() {
    for variant in Variant::ALL {
        let theme = build_theme(SEED, variant, 0.0, &[]).unwrap();
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            let tokens = project_tokens(&theme, mode);
            assert_eq!(tokens.len(), ColorRole::ALL.len(), "{variant} {mode}");
            for role in ColorRole::ALL {
                let value = tokens.get(role.token_name()).unwrap();
                assert!(is_hex6(&value), "{variant} {mode} {role}: {value}");
            }
        }
    }
}

#[test]
fn build_and_project_are_deterministic() {
    let custom = [CustomColor::new("brand", 0xff0000, true)];
    for variant in [Variant::Monochrome, Variant::Expressive, Variant::FruitSalad] {
        for contrast in [-1.0, 0.0, 0.5, 1.0] {
            let first = build_theme(SEED, variant, contrast, &custom).unwrap();
            let second = build_theme(SEED, variant, contrast, &custom).unwrap();
            assert_eq!(first, second);
            for mode in [ThemeMode::Light, ThemeMode::Dark] {
                assert_eq!(
                    project_tokens(&first, mode).to_css(":root", "md-sys-color"),
                    project_tokens(&second, mode).to_css(":root", "md-sys-color")
                );
            }
        }
    }
}

#[test]
fn monochrome_and_vibrant_differ() {
    let mono = build_theme(SEED, Variant::Monochrome, 0.0, &[]).unwrap();
    let vibrant = build_theme(SEED, Variant::Vibrant, 0.0, &[]).unwrap();
    assert!(
        ColorRole::ALL
            .iter()
            .any(|role| mono.schemes.light.role(*role) != vibrant.schemes.light.role(*role))
    );
}

#[test]
fn custom_color_propagates() {
    let custom = [CustomColor::new("brand", 0xff0000, true)];
    let theme = build_theme(SEED, Variant::TonalSpot, 0.0, &custom).unwrap();
    assert_eq!(theme.custom_colors.len(), 1);
    assert_eq!(theme.custom_colors[0].color.name, "brand");
    assert_eq!(theme.custom_colors[0].color.value.value(), 0xff0000);
}

#[test]
fn out_of_range_seeds_are_rejected() {
    for seed in [-1_i64, 0x1000000] {
        let err = build_theme(seed, Variant::TonalSpot, 0.0, &[]).unwrap_err();
        assert!(matches!(err, ThemeError::InvalidColor { .. }), "{err}");
    }
}

#[test]
fn store_republishes_on_seed_change() {
    let store = ThemeStore::new(StoreOptions::default()).unwrap();
    let published: Arc<Mutex<Vec<TokenMap>>> = Arc::default();
    let sink = published.clone();
    store.attach_surface(Arc::new(move |tokens: &TokenMap| {
        sink.lock().push(tokens.clone());
    }));

    store.set_source_color(SEED).unwrap();
    let previous_source = store.current_theme().unwrap().source;

    store.set_source_color("#ff0000").unwrap();
    let current = store.current_theme().unwrap();
    assert_ne!(current.source, previous_source);

    let published = published.lock();
    assert_eq!(published.len(), 2);
    assert_ne!(published[0].get("primary"), published[1].get("primary"));
}

#[test]
fn store_keeps_theme_after_invalid_seed() {
    let store = ThemeStore::new(StoreOptions::default()).unwrap();
    let surface = Arc::new(CssStyleSurface::default());
    store.attach_surface(surface.clone());
    store.set_source_color(SEED).unwrap();
    let stylesheet = surface.stylesheet().unwrap();

    let events: Arc<Mutex<Vec<StoreEvent>>> = Arc::default();
    let sink = events.clone();
    store.subscribe(move |event| sink.lock().push(event.clone()));

    assert!(store.set_source_color("not a color").is_err());
    assert_eq!(store.current_theme().unwrap().source.to_hex(), SEED);
    assert_eq!(surface.stylesheet().unwrap(), stylesheet);

    let events = events.lock();
    assert_eq!(events.len(), 1);
    assert!(matches!(&events[0], StoreEvent::BuildFailed(err) if err.is_invalid_color()));
}

#[test]
fn store_mode_switch_publishes_complete_dark_map() {
    let store = ThemeStore::new(StoreOptions {
        custom_colors: vec![CustomColor::new("brand", "#ff0000", true)],
        ..StoreOptions::default()
    })
    .unwrap();
    store.set_source_color(SEED).unwrap();

    let events: Arc<Mutex<Vec<StoreEvent>>> = Arc::default();
    let sink = events.clone();
    store.subscribe(move |event| sink.lock().push(event.clone()));
    store.set_mode(ThemeMode::Dark);

    let events = events.lock();
    let StoreEvent::ModeChanged(snapshot) = &events[0] else {
        panic!("expected a mode change, got {:?}", events[0]);
    };
    assert_eq!(snapshot.tokens.len(), ColorRole::ALL.len());
    assert_eq!(snapshot.tokens.mode(), ThemeMode::Dark);
    assert!(snapshot.theme.custom_color("brand").is_some());
}

#[test]
fn bad_custom_color_before_first_seed_is_rejected() {
    let store = ThemeStore::new(StoreOptions::default()).unwrap();
    let err = store
        .set_custom_colors(vec![CustomColor::new("brand", "#zzzzzz", false)])
        .unwrap_err();
    assert!(matches!(err, ThemeError::InvalidCustomColor { ref name, .. } if name == "brand"));

    store.set_source_color(SEED).unwrap();
    let theme = store.current_theme().unwrap();
    assert!(theme.custom_colors.is_empty());
    store.set_source_color("#ff0000").unwrap();
}

#[test]
fn invalid_store_options_are_rejected_up_front() {
    let contrast = ThemeStore::new(StoreOptions {
        contrast_level: 5.0,
        ..StoreOptions::default()
    });
    assert!(matches!(contrast, Err(ThemeError::InvalidContrast(level)) if level == 5.0));

    let custom = ThemeStore::new(StoreOptions {
        custom_colors: vec![CustomColor::new("brand", -1_i64, true)],
        ..StoreOptions::default()
    });
    assert!(matches!(custom, Err(ThemeError::InvalidCustomColor { .. })));
}

#[test]
fn concurrent_seeds_leave_surface_on_the_current_theme() {
    let store = Arc::new(ThemeStore::new(StoreOptions::default()).unwrap());
    let surface = Arc::new(CssStyleSurface::default());
    store.attach_surface(surface.clone());

    let seeds = ["#006494", "#ff0000", "#00ff00", "#6750a4"];
    let handles: Vec<_> = seeds
        .into_iter()
        .map(|seed| {
            let store = store.clone();
            std::thread::spawn(move || {
                for _ in 0..10 {
                    store.set_source_color(seed).unwrap();
                    store.toggle_mode();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let snapshot = store.snapshot().unwrap();
    assert_eq!(snapshot.mode, store.mode());
    assert_eq!(
        surface.stylesheet().unwrap(),
        snapshot.tokens.to_css(":root", tessera_theme::DEFAULT_CSS_PREFIX)
    );
}

#[test]
fn toggle_mode_flips_published_tokens() {
    let store = ThemeStore::new(StoreOptions::default()).unwrap();
    store.set_source_color(SEED).unwrap();

    assert_eq!(store.toggle_mode(), ThemeMode::Dark);
    assert_eq!(store.snapshot().unwrap().tokens.mode(), ThemeMode::Dark);
    assert_eq!(store.toggle_mode(), ThemeMode::Light);
    assert_eq!(store.snapshot().unwrap().tokens.mode(), ThemeMode::Light);
}
