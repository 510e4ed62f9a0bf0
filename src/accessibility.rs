//! Accessibility and interaction attributes for the outer card container.
//!
//! Event payloads are forwarded to caller handlers opaquely. The only event
//! the card interprets itself is a key press of `Enter` or `Space`, which
//! activates the click handler the way a native button would.

use crate::constants::{DEFAULT_ROLE, INTERACTIVE_ARIA_LABEL, INTERACTIVE_ROLE, STATIC_ARIA_LABEL};
use crate::models::CardProps;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// A keyboard event delivered to the card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// Key value, e.g. `"Enter"` or `" "`
    pub key: String,
    default_prevented: bool,
}

impl KeyEvent {
    /// Creates an event for the given key.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            default_prevented: false,
        }
    }

    /// Suppresses the host's default action for this key.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Returns true once [`Self::prevent_default`] has been called.
    #[must_use]
    pub const fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    fn is_activation_key(&self) -> bool {
        self.key == "Enter" || self.key == " "
    }
}

/// A pointer click delivered to the card.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerEvent {
    /// Horizontal position relative to the card
    pub x: f64,
    /// Vertical position relative to the card
    pub y: f64,
}

/// A focus or blur notification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusEvent {
    /// Element focus moved from or to, when known
    pub related_target: Option<String>,
}

/// What triggered a click handler.
#[derive(Debug)]
pub enum ActivationEvent<'a> {
    /// A pointer click
    Pointer(&'a PointerEvent),
    /// `Enter` or `Space` on the focused card
    Keyboard(&'a KeyEvent),
}

/// Click callback.
pub type ClickHandler = Arc<dyn Fn(ActivationEvent<'_>) + Send + Sync>;
/// Key-down callback; may prevent the default action.
pub type KeyHandler = Arc<dyn Fn(&mut KeyEvent) + Send + Sync>;
/// Focus or blur callback.
pub type FocusHandler = Arc<dyn Fn(&FocusEvent) + Send + Sync>;

/// Event handlers supplied by the caller.
#[derive(Clone, Default)]
pub struct CardHandlers {
    /// Pointer or keyboard activation
    pub on_click: Option<ClickHandler>,
    /// Raw key presses
    pub on_key_down: Option<KeyHandler>,
    /// Focus gained
    pub on_focus: Option<FocusHandler>,
    /// Focus lost
    pub on_blur: Option<FocusHandler>,
}

impl CardHandlers {
    /// Sets the click handler.
    #[must_use]
    pub fn on_click(
        mut self,
        handler: impl Fn(ActivationEvent<'_>) + Send + Sync + 'static,
    ) -> Self {
        self.on_click = Some(Arc::new(handler));
        self
    }

    /// Sets the key-down handler.
    #[must_use]
    pub fn on_key_down(mut self, handler: impl Fn(&mut KeyEvent) + Send + Sync + 'static) -> Self {
        self.on_key_down = Some(Arc::new(handler));
        self
    }

    /// Sets the focus handler.
    #[must_use]
    pub fn on_focus(mut self, handler: impl Fn(&FocusEvent) + Send + Sync + 'static) -> Self {
        self.on_focus = Some(Arc::new(handler));
        self
    }

    /// Sets the blur handler.
    #[must_use]
    pub fn on_blur(mut self, handler: impl Fn(&FocusEvent) + Send + Sync + 'static) -> Self {
        self.on_blur = Some(Arc::new(handler));
        self
    }
}

impl fmt::Debug for CardHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardHandlers")
            .field("on_click", &self.on_click.is_some())
            .field("on_key_down", &self.on_key_down.is_some())
            .field("on_focus", &self.on_focus.is_some())
            .field("on_blur", &self.on_blur.is_some())
            .finish()
    }
}

/// Key-down handler attached to focusable cards.
#[derive(Clone, Default)]
pub struct KeyDownHandler {
    on_click: Option<ClickHandler>,
    forward: Option<KeyHandler>,
}

impl KeyDownHandler {
    /// Handles one key press.
    ///
    /// `Enter` and `Space` invoke the click handler exactly once, with the
    /// default action prevented. The event is then forwarded to the caller's
    /// own key-down handler, if any.
    pub fn handle(&self, event: &mut KeyEvent) {
        if event.is_activation_key() {
            if let Some(on_click) = &self.on_click {
                event.prevent_default();
                on_click(ActivationEvent::Keyboard(&*event));
            }
        }
        if let Some(forward) = &self.forward {
            forward(event);
        }
    }
}

impl fmt::Debug for KeyDownHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyDownHandler")
            .field("activates_click", &self.on_click.is_some())
            .field("forwards", &self.forward.is_some())
            .finish()
    }
}

/// Attribute bag applied to the outer card container.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityAttributes {
    /// ARIA role
    pub role: String,
    /// Accessible name
    #[serde(rename = "aria-label")]
    pub aria_label: String,
    /// Id of the describing element
    #[serde(rename = "aria-describedby", skip_serializing_if = "Option::is_none")]
    pub aria_describedby: Option<String>,
    /// Present when the card is focusable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_index: Option<i32>,
    /// Keyboard activation, present when focusable
    #[serde(skip)]
    pub on_key_down: Option<KeyDownHandler>,
    /// Caller click handler, forwarded when focusable
    #[serde(skip)]
    pub on_click: Option<ClickHandler>,
    /// Caller focus handler, forwarded when focusable
    #[serde(skip)]
    pub on_focus: Option<FocusHandler>,
    /// Caller blur handler, forwarded when focusable
    #[serde(skip)]
    pub on_blur: Option<FocusHandler>,
}

impl AccessibilityAttributes {
    /// Derives the attributes for a card.
    ///
    /// Interactive cards are buttons. A card becomes focusable, and gets
    /// keyboard activation, when it is interactive or has a click or key-down
    /// handler.
    #[must_use]
    pub fn derive(props: &CardProps, handlers: &CardHandlers) -> Self {
        let role = if props.interactive {
            INTERACTIVE_ROLE.to_string()
        } else {
            props.role.clone().unwrap_or_else(|| DEFAULT_ROLE.to_string())
        };

        let aria_label = match props.aria_label.as_deref() {
            Some(label) if !label.is_empty() => label.to_string(),
            _ if props.interactive => INTERACTIVE_ARIA_LABEL.to_string(),
            _ => STATIC_ARIA_LABEL.to_string(),
        };

        let mut attributes = Self {
            role,
            aria_label,
            aria_describedby: props.aria_describedby.clone(),
            tab_index: None,
            on_key_down: None,
            on_click: None,
            on_focus: None,
            on_blur: None,
        };

        if props.interactive || handlers.on_click.is_some() || handlers.on_key_down.is_some() {
            attributes.tab_index = Some(props.tab_index.unwrap_or(0));
            attributes.on_key_down = Some(KeyDownHandler {
                on_click: handlers.on_click.clone(),
                forward: handlers.on_key_down.clone(),
            });
            attributes.on_click.clone_from(&handlers.on_click);
            attributes.on_focus.clone_from(&handlers.on_focus);
            attributes.on_blur.clone_from(&handlers.on_blur);
        }

        attributes
    }

    /// Returns true if the card takes part in keyboard navigation.
    #[must_use]
    pub const fn is_focusable(&self) -> bool {
        self.tab_index.is_some()
    }

    /// Dispatches a key press through the attached handler.
    pub fn key_down(&self, event: &mut KeyEvent) {
        if let Some(handler) = &self.on_key_down {
            handler.handle(event);
        }
    }

    /// Dispatches a pointer click to the caller's handler.
    pub fn click(&self, event: &PointerEvent) {
        if let Some(handler) = &self.on_click {
            handler(ActivationEvent::Pointer(event));
        }
    }

    /// Dispatches a focus notification.
    pub fn focus(&self, event: &FocusEvent) {
        if let Some(handler) = &self.on_focus {
            handler(event);
        }
    }

    /// Dispatches a blur notification.
    pub fn blur(&self, event: &FocusEvent) {
        if let Some(handler) = &self.on_blur {
            handler(event);
        }
    }
}

impl fmt::Debug for AccessibilityAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessibilityAttributes")
            .field("role", &self.role)
            .field("aria_label", &self.aria_label)
            .field("aria_describedby", &self.aria_describedby)
            .field("tab_index", &self.tab_index)
            .field("on_key_down", &self.on_key_down)
            .field("on_click", &self.on_click.is_some())
            .field("on_focus", &self.on_focus.is_some())
            .field("on_blur", &self.on_blur.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    fn counting_click() -> (Arc<AtomicUsize>, CardHandlers) {
        let clicks = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&clicks);
        let handlers = CardHandlers::default().on_click(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (clicks, handlers)
    }

    #[test]
    fn test_static_card_defaults() {
        let attrs =
            AccessibilityAttributes::derive(&CardProps::default(), &CardHandlers::default());
        assert_eq!(attrs.role, "region");
        assert_eq!(attrs.aria_label, "Gradient border card");
        assert!(!attrs.is_focusable());
        assert!(attrs.on_key_down.is_none());
    }

    #[test]
    fn test_role_override_ignored_when_interactive() {
        let mut props = CardProps::default();
        props.role = Some("article".to_string());
        let attrs = AccessibilityAttributes::derive(&props, &CardHandlers::default());
        assert_eq!(attrs.role, "article");

        let attrs =
            AccessibilityAttributes::derive(&props.interactive(true), &CardHandlers::default());
        assert_eq!(attrs.role, "button");
        assert_eq!(attrs.aria_label, "Interactive gradient border card");
        assert_eq!(attrs.tab_index, Some(0));
    }

    #[test]
    fn test_caller_label_and_tab_index() {
        let mut props = CardProps::default().interactive(true).aria_label("Open offer");
        props.tab_index = Some(3);
        let attrs = AccessibilityAttributes::derive(&props, &CardHandlers::default());
        assert_eq!(attrs.aria_label, "Open offer");
        assert_eq!(attrs.tab_index, Some(3));
    }

    #[test]
    fn test_click_handler_makes_card_focusable() {
        let (_, handlers) = counting_click();
        let attrs = AccessibilityAttributes::derive(&CardProps::default(), &handlers);
        assert_eq!(attrs.role, "region");
        assert_eq!(attrs.tab_index, Some(0));
    }

    #[test]
    fn test_enter_and_space_activate_once() {
        let (clicks, handlers) = counting_click();
        let attrs =
            AccessibilityAttributes::derive(&CardProps::default().interactive(true), &handlers);

        for key in ["Enter", " "] {
            let mut event = KeyEvent::new(key);
            attrs.key_down(&mut event);
            assert!(event.is_default_prevented());
        }
        assert_eq!(clicks.load(Ordering::SeqCst), 2);

        let mut event = KeyEvent::new("a");
        attrs.key_down(&mut event);
        assert!(!event.is_default_prevented());
        assert_eq!(clicks.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_key_down_forwarded_after_activation() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let click_order = Arc::clone(&order);
        let key_order = Arc::clone(&order);
        let handlers = CardHandlers::default()
            .on_click(move |_| click_order.lock().unwrap().push("click"))
            .on_key_down(move |event| {
                assert!(event.is_default_prevented());
                key_order.lock().unwrap().push("key");
            });
        let attrs = AccessibilityAttributes::derive(&CardProps::default(), &handlers);

        attrs.key_down(&mut KeyEvent::new("Enter"));
        assert_eq!(*order.lock().unwrap(), vec!["click", "key"]);
    }

    #[test]
    fn test_interactive_without_click_does_not_prevent_default() {
        let attrs = AccessibilityAttributes::derive(
            &CardProps::default().interactive(true),
            &CardHandlers::default(),
        );
        let mut event = KeyEvent::new("Enter");
        attrs.key_down(&mut event);
        assert!(!event.is_default_prevented());
    }

    #[test]
    fn test_pointer_and_focus_forwarding() {
        let (clicks, handlers) = counting_click();
        let focused = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&focused);
        let handlers = handlers.on_focus(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let attrs = AccessibilityAttributes::derive(&CardProps::default(), &handlers);

        attrs.click(&PointerEvent::default());
        attrs.focus(&FocusEvent::default());
        attrs.blur(&FocusEvent::default());
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
        assert_eq!(focused.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_serialized_attributes() {
        let attrs = AccessibilityAttributes::derive(
            &CardProps::default().interactive(true),
            &CardHandlers::default(),
        );
        let json = serde_json::to_value(&attrs).unwrap();
        assert_eq!(json["role"], "button");
        assert_eq!(json["aria-label"], "Interactive gradient border card");
        assert_eq!(json["tabIndex"], 0);
        assert!(json.get("aria-describedby").is_none());
    }
}
