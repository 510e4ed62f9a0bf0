//! The style composer.
//!
//! [`CardComposer`] turns untrusted [`CardProps`] into a [`ResolvedCard`]:
//! the outer gradient frame, the inner content surface, the container class
//! list, accessibility attributes, the content slot and a contrast audit of
//! the background.
//!
//! Individual invalid props are handled by the normalizers. A failure of the
//! normalization pipeline as a whole (a panicking resolver or reporter, or a
//! broken invariant) is returned as a [`CompositionError`] by the `try_*`
//! methods; [`CardComposer::compose`] replaces every field with its default
//! instead, so a card always renders.

use crate::accessibility::{AccessibilityAttributes, CardHandlers};
use crate::cache::{CacheStats, StyleCache};
use crate::color::{contrast, ColorResolver, ContrastResult, ResolverStrategy};
use crate::config::Config;
use crate::constants::{
    DEFAULT_BACKGROUND, DEFAULT_BORDER_RADIUS, DEFAULT_BORDER_WIDTH, DEFAULT_GRADIENT_FROM,
    DEFAULT_GRADIENT_TO, DEFAULT_PADDING, DEFAULT_TEXT_COLOR, EMPTY_CONTENT_CLASSES,
    EMPTY_CONTENT_TEXT, FOCUS_RING_CLASSES,
};
use crate::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticsReporter, TracingReporter};
use crate::models::{
    CardProps, GradientConfig, InnerSurface, OuterFrame, PropValue, ResolvedStyleSet,
};
use crate::normalize::{
    normalize_border_radius, normalize_border_width, normalize_color, normalize_padding,
    ValidatedProps,
};
use crate::presets::{resolve_animation, resolve_shadow};
use serde::Serialize;
use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

/// Why composition could not use the caller's props.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompositionError {
    /// A collaborator panicked during normalization.
    Panicked {
        /// Panic payload, when it was a string
        message: String,
    },
    /// A normalized value broke an invariant.
    InvariantViolated {
        /// Offending prop
        field: String,
        /// Offending value
        value: String,
    },
}

impl fmt::Display for CompositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Panicked { message } => write!(f, "normalization panicked: {message}"),
            Self::InvariantViolated { field, value } => {
                write!(f, "normalized {field} is invalid: {value}")
            }
        }
    }
}

impl std::error::Error for CompositionError {}

/// Runs `f`, turning a panic into [`CompositionError::Panicked`].
fn guarded<T>(f: impl FnOnce() -> T) -> Result<T, CompositionError> {
    catch_unwind(AssertUnwindSafe(f)).map_err(|payload| CompositionError::Panicked {
        message: panic_message(payload.as_ref()).unwrap_or_else(|| "unknown panic".to_string()),
    })
}

/// Text of a panic payload, or `None` when it is not a string.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> Option<String> {
    if let Some(s) = payload.downcast_ref::<&str>() {
        Some((*s).to_string())
    } else {
        payload.downcast_ref::<String>().cloned()
    }
}

/// What a card shows inside its inner surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ContentSlot {
    /// The caller's content, rendered as given
    Present(PropValue),
    /// Shown when the content is null or omitted
    #[serde(rename_all = "camelCase")]
    Placeholder {
        /// Placeholder text
        text: &'static str,
        /// Always `status`
        role: &'static str,
        /// Always `polite`
        aria_live: &'static str,
        /// Placeholder classes
        class_name: &'static str,
    },
}

impl ContentSlot {
    /// Returns true for the placeholder.
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }
}

/// Decides what the inner surface shows.
///
/// Only `null` and omitted content are empty; `""`, `0`, `false` and `[]`
/// are present content.
#[must_use]
pub fn compose_content(children: &PropValue) -> ContentSlot {
    if children.is_nullish() {
        ContentSlot::Placeholder {
            text: EMPTY_CONTENT_TEXT,
            role: "status",
            aria_live: "polite",
            class_name: EMPTY_CONTENT_CLASSES,
        }
    } else {
        ContentSlot::Present(children.clone())
    }
}

/// Everything about a card that depends only on its visual props.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleOutcome {
    /// Normalized visual props
    pub props: ValidatedProps,
    /// Outer frame and inner surface
    pub styles: ResolvedStyleSet,
    /// Full class list of the outer container
    pub class_name: String,
    /// Animation classes alone
    pub animation: String,
    /// Contrast of the configured text color on the background
    pub contrast: ContrastResult,
}

/// A fully composed card.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedCard {
    /// Normalized visual props
    pub props: ValidatedProps,
    /// Outer frame and inner surface
    pub styles: ResolvedStyleSet,
    /// Full class list of the outer container
    pub class_name: String,
    /// Animation classes alone
    pub animation: String,
    /// Attributes and handlers for the outer container
    pub accessibility: AccessibilityAttributes,
    /// Inner content
    pub content: ContentSlot,
    /// Contrast of the configured text color on the background
    pub contrast: ContrastResult,
}

impl ResolvedCard {
    fn assemble(outcome: &StyleOutcome, props: &CardProps, handlers: &CardHandlers) -> Self {
        Self {
            props: outcome.props.clone(),
            styles: outcome.styles.clone(),
            class_name: outcome.class_name.clone(),
            animation: outcome.animation.clone(),
            accessibility: AccessibilityAttributes::derive(props, handlers),
            content: compose_content(&props.children),
            contrast: outcome.contrast,
        }
    }
}

/// Composes cards with a fixed resolver, reporter and audit color.
pub struct CardComposer {
    resolver: Arc<dyn ColorResolver>,
    reporter: Arc<dyn DiagnosticsReporter>,
    text_color: String,
    cache: Option<StyleCache<StyleOutcome>>,
}

impl fmt::Debug for CardComposer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardComposer")
            .field("resolver", &self.resolver.name())
            .field("text_color", &self.text_color)
            .field("cache", &self.cache.as_ref().map(StyleCache::stats))
            .finish_non_exhaustive()
    }
}

impl Default for CardComposer {
    /// Computed resolution, diagnostics to `tracing`, no cache.
    fn default() -> Self {
        Self::new(ResolverStrategy::default().build(), Arc::new(TracingReporter))
    }
}

impl CardComposer {
    /// Creates a composer auditing contrast against black text, without a cache.
    pub fn new(resolver: Arc<dyn ColorResolver>, reporter: Arc<dyn DiagnosticsReporter>) -> Self {
        Self {
            resolver,
            reporter,
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            cache: None,
        }
    }

    /// Creates a composer from configuration.
    pub fn from_config(config: &Config, reporter: Arc<dyn DiagnosticsReporter>) -> Self {
        Self::new(config.resolver.strategy.build(), reporter)
            .with_text_color(config.contrast.text_color.clone())
            .with_cache(config.cache.capacity)
    }

    /// Sets the foreground color the background is audited against.
    #[must_use]
    pub fn with_text_color(mut self, text_color: impl Into<String>) -> Self {
        self.text_color = text_color.into();
        self
    }

    /// Enables memoization of up to `capacity` styles; `0` disables it.
    #[must_use]
    pub fn with_cache(mut self, capacity: usize) -> Self {
        self.cache = (capacity > 0).then(|| StyleCache::with_capacity(capacity));
        self
    }

    /// The active resolver.
    pub fn resolver(&self) -> &dyn ColorResolver {
        self.resolver.as_ref()
    }

    /// Cache counters, when caching is enabled.
    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache.as_ref().map(StyleCache::stats)
    }

    fn normalize(&self, props: &CardProps) -> ValidatedProps {
        let resolver = self.resolver.as_ref();
        let reporter = self.reporter.as_ref();

        // Omitted props take their defaults silently; explicit values are validated.
        ValidatedProps {
            gradient_from: normalize_color(
                &props.gradient_from.or_default_value(DEFAULT_GRADIENT_FROM),
                DEFAULT_GRADIENT_FROM,
                "gradientFrom",
                resolver,
                reporter,
            ),
            gradient_to: normalize_color(
                &props.gradient_to.or_default_value(DEFAULT_GRADIENT_TO),
                DEFAULT_GRADIENT_TO,
                "gradientTo",
                resolver,
                reporter,
            ),
            border_width: normalize_border_width(
                &props.border_width.or_default_value(DEFAULT_BORDER_WIDTH),
                reporter,
            ),
            border_radius: normalize_border_radius(
                &props.border_radius.or_default_value(DEFAULT_BORDER_RADIUS),
                reporter,
            ),
            padding: normalize_padding(&props.padding.or_default_value(DEFAULT_PADDING), reporter),
            background: normalize_color(
                &props.background.or_default_value(DEFAULT_BACKGROUND),
                DEFAULT_BACKGROUND,
                "background",
                resolver,
                reporter,
            ),
        }
    }

    /// Normalizes the visual props, or explains why the pipeline failed.
    pub fn try_validate(&self, props: &CardProps) -> Result<ValidatedProps, CompositionError> {
        let validated = guarded(|| self.normalize(props))?;
        validated.check()?;
        Ok(validated)
    }

    /// Normalizes the visual props, substituting every default on failure.
    pub fn validate(&self, props: &CardProps) -> ValidatedProps {
        match self.try_validate(props) {
            Ok(validated) => validated,
            Err(err) => {
                let diagnostic = Diagnostic::error(
                    DiagnosticKind::CompositionFailure,
                    "props",
                    format!("Failed to validate card props, using defaults: {err}"),
                );
                if guarded(|| self.reporter.report(&diagnostic)).is_err() {
                    tracing::error!("{diagnostic}");
                }
                ValidatedProps::default()
            }
        }
    }

    /// Audits `background` against the configured text color.
    ///
    /// Emits a low-contrast warning only when both colors resolved and the
    /// ratio is below AA.
    pub fn audit_contrast(&self, background: &str) -> ContrastResult {
        let result = contrast(&self.text_color, background, self.resolver.as_ref());
        if let (false, Some(ratio)) = (result.is_valid, result.ratio) {
            self.reporter.report(&Diagnostic::warn(
                DiagnosticKind::LowContrast,
                "background",
                format!(
                    "Color contrast ratio {ratio:.2}:1 between text and background \
                     may not meet WCAG standards. \
                     Consider using a background color with better contrast."
                ),
            ));
        }
        result
    }

    fn style_outcome(&self, validated: ValidatedProps, props: &CardProps) -> StyleOutcome {
        let shadow = resolve_shadow(&props.shadow.or_default_value(true));
        let animation = resolve_animation(&props.animated.or_default_value(false));

        let mut outer_frame = OuterFrame {
            background: GradientConfig::new(&validated.gradient_from, &validated.gradient_to).css(),
            padding: format!("{}px", validated.border_width),
            border_radius: validated.border_radius.clone(),
            box_shadow: (!shadow.is_empty()).then_some(shadow),
            cursor: props.interactive.then(|| "pointer".to_string()),
            outline: props.interactive.then(|| "none".to_string()),
            extra: BTreeMap::new(),
        };
        outer_frame.apply_overrides(&props.style);

        let inner_surface = InnerSurface {
            background: validated.background.clone(),
            border_radius: format!(
                "calc({} - {}px)",
                validated.border_radius, validated.border_width
            ),
            padding: validated.padding.clone(),
            width: "100%".to_string(),
            height: "100%".to_string(),
        };

        let focus_ring = if props.interactive { FOCUS_RING_CLASSES } else { "" };
        let class_name = [animation.as_str(), focus_ring, props.class_name.as_deref().unwrap_or("")]
            .iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        let contrast = guarded(|| self.audit_contrast(&validated.background))
            .unwrap_or(ContrastResult::UNRESOLVED);

        StyleOutcome {
            props: validated,
            styles: ResolvedStyleSet {
                outer_frame,
                inner_surface,
            },
            class_name,
            animation,
            contrast,
        }
    }

    fn cache_key(props: &CardProps) -> String {
        format!(
            "{:?}",
            (
                &props.gradient_from,
                &props.gradient_to,
                &props.border_width,
                &props.border_radius,
                &props.padding,
                &props.background,
                &props.shadow,
                &props.animated,
                &props.style,
                &props.class_name,
                props.interactive,
            )
        )
    }

    /// Composes a card, or explains why the props could not be used.
    pub fn try_compose(
        &self,
        props: &CardProps,
        handlers: &CardHandlers,
    ) -> Result<ResolvedCard, CompositionError> {
        let validated = self.try_validate(props)?;
        let outcome = self.style_outcome(validated, props);
        Ok(ResolvedCard::assemble(&outcome, props, handlers))
    }

    /// Composes a card; never fails.
    ///
    /// With a cache enabled, repeated visual props reuse the earlier result
    /// and do not report their diagnostics again.
    pub fn compose(&self, props: &CardProps, handlers: &CardHandlers) -> ResolvedCard {
        match &self.cache {
            Some(cache) => {
                let outcome = cache.get_or_insert_with(&Self::cache_key(props), || {
                    self.style_outcome(self.validate(props), props)
                });
                ResolvedCard::assemble(&outcome, props, handlers)
            }
            None => {
                let outcome = self.style_outcome(self.validate(props), props);
                ResolvedCard::assemble(&outcome, props, handlers)
            }
        }
    }
}
