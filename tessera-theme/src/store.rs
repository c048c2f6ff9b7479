//! Stateful theme orchestration for an embedding UI layer.
//!
//! # Responsibilities
//!
//! - Hold the current seed color and the theme derived from it.
//! - Rebuild the theme when an input changes, re-project tokens when the mode
//!   changes.
//! - Publish complete token maps to attached [`StyleSurface`]s and notify
//!   subscribers.
//!
//! A failed rebuild never clears or partially updates the published state.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use parking_lot::{Mutex, RwLock};
use tracing::{debug, error, info, instrument};

use crate::{
    color::{ColorInput, Rgb},
    engine::{MaterialPaletteEngine, PaletteEngine},
    error::ThemeError,
    surface::StyleSurface,
    theme::{
        ContrastLevel, CustomColor, MaterialTheme, ThemeBuilder, ThemeMode, validate_inputs,
    },
    token::{Projection, TokenMap, project_tokens_with},
    variant::Variant,
};

static NEXT_SUBSCRIPTION_ID: AtomicU64 = AtomicU64::new(1);

/// Handle returned by [`ThemeStore::subscribe`] and
/// [`ThemeStore::attach_surface`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    fn new() -> Self {
        Self(NEXT_SUBSCRIPTION_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A consistent (theme, mode, tokens) triple.
///
/// The store replaces the whole snapshot at once, so readers never observe
/// tokens that belong to a different theme or mode.
#[derive(Clone, Debug)]
pub struct ThemeSnapshot {
    /// The current theme.
    pub theme: Arc<MaterialTheme>,
    /// The mode `tokens` were projected for.
    pub mode: ThemeMode,
    /// Projection policy used for `tokens`.
    pub projection: Projection,
    /// The published tokens.
    pub tokens: Arc<TokenMap>,
}

impl ThemeSnapshot {
    fn new(theme: Arc<MaterialTheme>, mode: ThemeMode, projection: Projection) -> Self {
        let tokens = Arc::new(project_tokens_with(&theme, mode, projection));
        Self {
            theme,
            mode,
            projection,
            tokens,
        }
    }
}

/// Notifications delivered to store subscribers.
#[derive(Clone, Debug)]
pub enum StoreEvent {
    /// A new theme was built and its tokens published.
    ThemeChanged(Arc<ThemeSnapshot>),
    /// The mode changed and tokens were re-projected from the same theme.
    ModeChanged(Arc<ThemeSnapshot>),
    /// A rebuild failed; the previous snapshot is still current.
    BuildFailed(ThemeError),
}

type Observer = Arc<dyn Fn(&StoreEvent) + Send + Sync>;

/// Initial inputs of a [`ThemeStore`].
#[derive(Clone, Debug, PartialEq)]
pub struct StoreOptions {
    /// Palette strategy.
    pub variant: Variant,
    /// Contrast level in `[-1.0, 1.0]`.
    pub contrast_level: f64,
    /// Mode tokens are published for.
    pub mode: ThemeMode,
    /// Custom color definitions.
    pub custom_colors: Vec<CustomColor>,
    /// Projection policy, fixed for the lifetime of the store.
    pub projection: Projection,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            variant: Variant::TonalSpot,
            contrast_level: ContrastLevel::STANDARD,
            mode: ThemeMode::Light,
            custom_colors: Vec::new(),
            projection: Projection::RoleDirect,
        }
    }
}

#[derive(Clone, Debug)]
struct Inputs {
    source: Option<Rgb>,
    variant: Variant,
    contrast_level: f64,
    custom_colors: Vec<CustomColor>,
    mode: ThemeMode,
}

/// Holds the current theme and republishes tokens when inputs change.
///
/// Transitions are serialized internally, and surfaces and observers see
/// published snapshots in the order they were installed. Observers and
/// surfaces run after the new snapshot is installed and must not call the
/// store's setters or [`ThemeStore::attach_surface`]; getters are fine.
pub struct ThemeStore<E = MaterialPaletteEngine> {
    builder: ThemeBuilder<E>,
    projection: Projection,
    inputs: Mutex<Inputs>,
    // Taken before `inputs` is released and held while publishing.
    publishing: Mutex<()>,
    // Mirrors `Inputs::mode` so getters never wait on `inputs`.
    mode: RwLock<ThemeMode>,
    snapshot: RwLock<Option<Arc<ThemeSnapshot>>>,
    observers: RwLock<Vec<(SubscriptionId, Observer)>>,
    surfaces: RwLock<Vec<(SubscriptionId, Arc<dyn StyleSurface>)>>,
}

impl ThemeStore<MaterialPaletteEngine> {
    /// Creates an uninitialized store backed by the default engine.
    ///
    /// Fails when `options` carries an invalid contrast level or custom
    /// color.
    pub fn new(options: StoreOptions) -> Result<Self, ThemeError> {
        Self::with_engine(MaterialPaletteEngine::default(), options)
    }
}

impl<E: PaletteEngine> ThemeStore<E> {
    /// Creates an uninitialized store backed by `engine`.
    pub fn with_engine(engine: E, options: StoreOptions) -> Result<Self, ThemeError> {
        validate_inputs(options.contrast_level, &options.custom_colors)?;
        Ok(Self {
            builder: ThemeBuilder::new(engine),
            projection: options.projection,
            inputs: Mutex::new(Inputs {
                source: None,
                variant: options.variant,
                contrast_level: options.contrast_level,
                custom_colors: options.custom_colors,
                mode: options.mode,
            }),
            publishing: Mutex::new(()),
            mode: RwLock::new(options.mode),
            snapshot: RwLock::new(None),
            observers: RwLock::new(Vec::new()),
            surfaces: RwLock::new(Vec::new()),
        })
    }

    /// `true` once a theme has been built successfully.
    pub fn is_ready(&self) -> bool {
        self.snapshot.read().is_some()
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Option<Arc<ThemeSnapshot>> {
        self.snapshot.read().clone()
    }

    /// The current theme.
    pub fn current_theme(&self) -> Option<Arc<MaterialTheme>> {
        self.snapshot().map(|snapshot| snapshot.theme.clone())
    }

    /// Tokens of the current theme for `mode`.
    ///
    /// Returns the published map when `mode` is the published mode, otherwise
    /// projects the current theme on demand.
    pub fn current_tokens(&self, mode: ThemeMode) -> Option<TokenMap> {
        let snapshot = self.snapshot()?;
        if snapshot.mode == mode {
            Some(TokenMap::clone(&snapshot.tokens))
        } else {
            Some(project_tokens_with(&snapshot.theme, mode, snapshot.projection))
        }
    }

    /// The mode tokens are published for.
    pub fn mode(&self) -> ThemeMode {
        *self.mode.read()
    }

    /// The projection policy of this store.
    pub fn projection(&self) -> Projection {
        self.projection
    }

    /// Replaces the seed color and rebuilds the theme.
    ///
    /// On failure the error is logged, reported to subscribers as
    /// [`StoreEvent::BuildFailed`] and returned; the previous theme stays
    /// current.
    pub fn set_source_color(&self, color: impl Into<ColorInput>) -> Result<(), ThemeError> {
        self.set_source(color.into())
    }

    #[instrument(level = "debug", skip(self, color), fields(color = %color))]
    fn set_source(&self, color: ColorInput) -> Result<(), ThemeError> {
        self.rebuild(Some(color), |_| {})
    }

    /// Changes the palette strategy and rebuilds the current theme.
    #[instrument(level = "debug", skip(self))]
    pub fn set_variant(&self, variant: Variant) -> Result<(), ThemeError> {
        self.rebuild(None, |inputs| inputs.variant = variant)
    }

    /// Changes the contrast level and rebuilds the current theme.
    #[instrument(level = "debug", skip(self))]
    pub fn set_contrast_level(&self, contrast_level: f64) -> Result<(), ThemeError> {
        self.rebuild(None, |inputs| inputs.contrast_level = contrast_level)
    }

    /// Replaces the custom color definitions and rebuilds the current theme.
    #[instrument(level = "debug", skip(self, custom_colors))]
    pub fn set_custom_colors(&self, custom_colors: Vec<CustomColor>) -> Result<(), ThemeError> {
        self.rebuild(None, |inputs| inputs.custom_colors = custom_colors)
    }

    /// Switches the published mode.
    ///
    /// Re-projects the current theme without rebuilding it. Does nothing when
    /// `mode` is already current.
    #[instrument(level = "debug", skip(self))]
    pub fn set_mode(&self, mode: ThemeMode) {
        self.switch_mode(|_| mode);
    }

    /// Switches to the other mode and returns it.
    #[instrument(level = "debug", skip(self))]
    pub fn toggle_mode(&self) -> ThemeMode {
        self.switch_mode(ThemeMode::toggled)
    }

    fn switch_mode(&self, pick: impl FnOnce(ThemeMode) -> ThemeMode) -> ThemeMode {
        let mut inputs = self.inputs.lock();
        let mode = pick(inputs.mode);
        if inputs.mode == mode {
            return mode;
        }
        inputs.mode = mode;
        *self.mode.write() = mode;

        let Some(current) = self.snapshot() else {
            debug!("Mode set to {mode} before any theme was built");
            return mode;
        };
        let snapshot = Arc::new(ThemeSnapshot::new(
            current.theme.clone(),
            mode,
            self.projection,
        ));
        *self.snapshot.write() = Some(snapshot.clone());
        let _publishing = self.publishing.lock();
        drop(inputs);

        info!("Theme mode changed to {mode}");
        self.publish(&snapshot);
        self.notify(&StoreEvent::ModeChanged(snapshot));
        mode
    }

    /// Registers an observer for store events.
    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(&StoreEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId::new();
        self.observers.write().push((id, Arc::new(observer)));
        id
    }

    /// Removes an observer. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.write();
        let before = observers.len();
        observers.retain(|(observer_id, _)| *observer_id != id);
        observers.len() != before
    }

    /// Attaches a style surface.
    ///
    /// The surface receives the current tokens right away when the store is
    /// ready, and every published map afterwards.
    pub fn attach_surface(&self, surface: Arc<dyn StyleSurface>) -> SubscriptionId {
        let id = SubscriptionId::new();
        let _publishing = self.publishing.lock();
        self.surfaces.write().push((id, surface.clone()));
        if let Some(snapshot) = self.snapshot() {
            surface.apply(&snapshot.tokens);
        }
        id
    }

    /// Detaches a style surface. Returns `false` if `id` was not attached.
    pub fn detach_surface(&self, id: SubscriptionId) -> bool {
        let mut surfaces = self.surfaces.write();
        let before = surfaces.len();
        surfaces.retain(|(surface_id, _)| *surface_id != id);
        surfaces.len() != before
    }

    fn rebuild(
        &self,
        seed: Option<ColorInput>,
        update: impl FnOnce(&mut Inputs),
    ) -> Result<(), ThemeError> {
        let mut inputs = self.inputs.lock();
        let mut next = inputs.clone();
        update(&mut next);

        let seed = match (seed, next.source) {
            (Some(seed), _) => seed,
            (None, Some(source)) => ColorInput::from(source),
            (None, None) => {
                // Nothing to rebuild yet; keep the inputs for the first build.
                if let Err(err) = validate_inputs(next.contrast_level, &next.custom_colors) {
                    let _publishing = self.publishing.lock();
                    drop(inputs);
                    return Err(self.fail(err));
                }
                *inputs = next;
                return Ok(());
            }
        };

        let theme = match self.builder.build(
            seed,
            next.variant,
            next.contrast_level,
            &next.custom_colors,
        ) {
            Ok(theme) => theme,
            Err(err) => {
                let _publishing = self.publishing.lock();
                drop(inputs);
                return Err(self.fail(err));
            }
        };

        next.source = Some(theme.source);
        let snapshot = Arc::new(ThemeSnapshot::new(
            Arc::new(theme),
            next.mode,
            self.projection,
        ));
        *self.snapshot.write() = Some(snapshot.clone());
        *inputs = next;
        let _publishing = self.publishing.lock();
        drop(inputs);

        info!(
            "Theme rebuilt from {} ({}, contrast {})",
            snapshot.theme.source, snapshot.theme.variant, snapshot.theme.contrast_level
        );
        self.publish(&snapshot);
        self.notify(&StoreEvent::ThemeChanged(snapshot));
        Ok(())
    }

    fn fail(&self, err: ThemeError) -> ThemeError {
        error!("Theme rebuild failed, keeping previous theme: {err}");
        self.notify(&StoreEvent::BuildFailed(err.clone()));
        err
    }

    fn publish(&self, snapshot: &ThemeSnapshot) {
        let surfaces: Vec<_> = self
            .surfaces
            .read()
            .iter()
            .map(|(_, surface)| surface.clone())
            .collect();
        debug!(
            "Publishing {} tokens to {} surfaces",
            snapshot.tokens.len(),
            surfaces.len()
        );
        for surface in surfaces {
            surface.apply(&snapshot.tokens);
        }
    }

    fn notify(&self, event: &StoreEvent) {
        let observers: Vec<Observer> = self
            .observers
            .read()
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect();
        for observer in observers {
            observer(event);
        }
    }
}
