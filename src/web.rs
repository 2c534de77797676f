//! Browser DOM host
//!
//! Binds a [`ZoomToggle`] to a container/image pair found by CSS selector.
//! The container listens for `mousedown`, the image suppresses `dragstart`,
//! and the toggle writes the image's inline `transform` and
//! `transform-origin`. Listeners live as long as the [`ZoomBinding`] that
//! owns them.

use crate::{
    core::{
        config::ZoomConfig,
        geo::{Point, Rect},
        state::ScaleState,
        transform::ZoomTransform,
    },
    input::{
        events::{EventResponse, MouseButton, ZoomEvent},
        handler::ZoomToggle,
    },
    traits::ZoomSurface,
    Result, ZoomError,
};
use gloo_events::{EventListener, EventListenerOptions};
use std::{
    cell::RefCell,
    collections::{hash_map::Entry, HashMap},
    rc::Rc,
};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{Document, DocumentReadyState, Element, Event, HtmlElement, MouseEvent};

macro_rules! console_log {
    ($($t:tt)*) => (web_sys::console::log_1(&JsValue::from_str(&format!($($t)*))))
}

thread_local! {
    /// Bindings installed through the page-load gate, kept for the page lifetime
    static INSTALLED: RefCell<Registry<ZoomBinding>> = RefCell::new(Registry::default());
}

/// Installed bindings keyed by their container/image selector pair
struct Registry<B> {
    bindings: HashMap<(String, String), B>,
}

impl<B> Default for Registry<B> {
    fn default() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }
}

impl<B> Registry<B> {
    fn key(config: &ZoomConfig) -> (String, String) {
        (
            config.container_selector.clone(),
            config.image_selector.clone(),
        )
    }

    fn is_bound(&self, config: &ZoomConfig) -> bool {
        self.bindings.contains_key(&Self::key(config))
    }

    /// Keeps `binding` unless the pair is already bound; returns whether it was kept
    fn insert(&mut self, config: &ZoomConfig, binding: B) -> bool {
        match self.bindings.entry(Self::key(config)) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(binding);
                true
            }
        }
    }

    fn len(&self) -> usize {
        self.bindings.len()
    }
}

impl From<ZoomError> for JsValue {
    fn from(error: ZoomError) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}

fn host_error(value: JsValue) -> ZoomError {
    ZoomError::Host(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

fn document() -> Result<Document> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| ZoomError::Host("no document available".to_string()))
}

fn require_html(
    found: std::result::Result<Option<Element>, JsValue>,
    selector: &str,
) -> Result<HtmlElement> {
    found
        .map_err(host_error)?
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| ZoomError::MissingElement {
            selector: selector.to_string(),
        })
}

/// Prefers the exact double the browser reports over the integer getter
fn client_coordinate(exact: Option<f64>, rounded: i32) -> f64 {
    exact.filter(|value| value.is_finite()).unwrap_or(rounded as f64)
}

fn exact_property(event: &MouseEvent, name: &str) -> Option<f64> {
    js_sys::Reflect::get(event.as_ref(), &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.as_f64())
}

/// `clientX`/`clientY` without the truncation of `MouseEvent::client_x`
fn client_position(event: &MouseEvent) -> Point {
    Point::new(
        client_coordinate(exact_property(event, "clientX"), event.client_x()),
        client_coordinate(exact_property(event, "clientY"), event.client_y()),
    )
}

fn apply_response(event: &Event, response: &EventResponse) {
    if response.prevent_default {
        event.prevent_default();
    }
    if response.stop_propagation {
        event.stop_propagation();
    }
}

/// Image element as a zoom surface
pub struct DomImage {
    element: HtmlElement,
}

impl DomImage {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }
}

impl ZoomSurface for DomImage {
    fn bounding_rect(&self) -> Rect {
        let rect = self.element.get_bounding_client_rect();
        Rect::from_origin_size(rect.left(), rect.top(), rect.width(), rect.height())
    }

    fn apply_transform(&mut self, transform: &ZoomTransform) -> Result<()> {
        let style = self.element.style();
        style
            .set_property("transform", &transform.css_transform())
            .map_err(host_error)?;
        style
            .set_property("transform-origin", &transform.css_origin())
            .map_err(host_error)?;
        Ok(())
    }
}

/// Live binding between a container, its image and a zoom toggle
///
/// Dropping the binding removes both listeners; the image keeps whatever
/// transform was last written.
pub struct ZoomBinding {
    toggle: Rc<RefCell<ZoomToggle<DomImage>>>,
    _listeners: Vec<EventListener>,
}

impl ZoomBinding {
    /// Resolves the selectors in `document` and installs the listeners
    pub fn attach(document: &Document, config: ZoomConfig) -> Result<Self> {
        config.validate()?;
        let container = require_html(
            document.query_selector(&config.container_selector),
            &config.container_selector,
        )?;
        let image = require_html(
            container.query_selector(&config.image_selector),
            &config.image_selector,
        )?;
        log::info!(
            "zoom attached to `{}` / `{}`",
            config.container_selector,
            config.image_selector
        );

        let toggle = Rc::new(RefCell::new(ZoomToggle::new(
            DomImage::new(image.clone()),
            config,
        )?));
        let mut listeners = Vec::with_capacity(2);

        let press_toggle = Rc::clone(&toggle);
        listeners.push(EventListener::new_with_options(
            &container,
            "mousedown",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let press = ZoomEvent::Press {
                    position: client_position(mouse),
                    button: MouseButton::from_dom_button(mouse.button()),
                };
                match press_toggle.borrow_mut().handle_event(&press) {
                    Ok(response) => apply_response(event, &response),
                    Err(e) => {
                        // The press was ours even though the style write failed
                        event.prevent_default();
                        event.stop_propagation();
                        log::warn!("zoom press failed: {}", e);
                    }
                }
            },
        ));

        let drag_toggle = Rc::clone(&toggle);
        listeners.push(EventListener::new_with_options(
            &image,
            "dragstart",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                match drag_toggle.borrow_mut().handle_event(&ZoomEvent::DragStart) {
                    Ok(response) => apply_response(event, &response),
                    Err(_) => event.prevent_default(),
                }
            },
        ));

        Ok(Self {
            toggle,
            _listeners: listeners,
        })
    }

    pub fn state(&self) -> ScaleState {
        self.toggle.borrow().state()
    }

    pub fn config(&self) -> ZoomConfig {
        self.toggle.borrow().config().clone()
    }

    pub fn press_count(&self) -> u64 {
        self.toggle.borrow().press_count()
    }

    pub fn reset(&self) -> Result<()> {
        self.toggle.borrow_mut().reset()
    }
}

impl Drop for ZoomBinding {
    fn drop(&mut self) {
        log::info!("zoom detached");
    }
}

/// Attaches unless the same selector pair is already installed, so repeated
/// `installZoom` calls never stack listeners on one container
fn install_now(document: &Document, config: ZoomConfig) -> Result<()> {
    if INSTALLED.with(|installed| installed.borrow().is_bound(&config)) {
        log::info!(
            "zoom already installed on `{}` / `{}`",
            config.container_selector,
            config.image_selector
        );
        return Ok(());
    }

    let binding = ZoomBinding::attach(document, config)?;
    let key = binding.config();
    INSTALLED.with(|installed| {
        let mut installed = installed.borrow_mut();
        installed.insert(&key, binding);
        log::debug!("{} zoom binding(s) installed", installed.len());
    });
    Ok(())
}

/// Installs a binding once the document's markup has been parsed
///
/// Attaches immediately when `DOMContentLoaded` has already fired. Errors
/// raised after the wait are logged to the console.
pub fn install_on_ready(config: ZoomConfig) -> Result<()> {
    config.validate()?;
    let document = document()?;
    if document.ready_state() != DocumentReadyState::Loading {
        return install_now(&document, config);
    }

    let target = document.clone();
    EventListener::once(&document, "DOMContentLoaded", move |_| {
        if let Err(e) = install_now(&target, config) {
            log::error!("zoom not activated: {}", e);
            console_log!("zoom not activated: {}", e);
        }
    })
    .forget();
    Ok(())
}

fn parse_config(config_json: Option<String>) -> Result<ZoomConfig> {
    match config_json {
        Some(json) => ZoomConfig::from_json(&json),
        None => Ok(ZoomConfig::default()),
    }
}

/// Installs press-to-zoom on the page, waiting for the DOM if needed
#[wasm_bindgen(js_name = installZoom)]
pub fn install_zoom(config_json: Option<String>) -> std::result::Result<(), JsValue> {
    install_on_ready(parse_config(config_json)?)?;
    Ok(())
}

/// JS handle on a binding; `free()` detaches it
#[wasm_bindgen]
pub struct ZoomHandle {
    binding: ZoomBinding,
}

#[wasm_bindgen]
impl ZoomHandle {
    /// Attaches immediately; throws if an element is missing
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> std::result::Result<ZoomHandle, JsValue> {
        let binding = ZoomBinding::attach(&document()?, parse_config(config_json)?)?;
        Ok(ZoomHandle { binding })
    }

    #[wasm_bindgen(js_name = isMagnified)]
    pub fn is_magnified(&self) -> bool {
        self.binding.state().is_magnified()
    }

    #[wasm_bindgen(js_name = pressCount)]
    pub fn press_count(&self) -> f64 {
        self.binding.press_count() as f64
    }

    pub fn reset(&self) -> std::result::Result<(), JsValue> {
        self.binding.reset()?;
        Ok(())
    }
}
