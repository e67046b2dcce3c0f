use valentine_core as flow;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ModalProps {
    #[prop_or_default]
    pub children: Html,
}

/// Renders its children straight into `document.body`, so overlays escape the page layout.
#[function_component]
pub(crate) fn Modal(props: &ModalProps) -> Html {
    create_portal(props.children.clone(), gloo::utils::body().into())
}

/// Seed for the flower layout, drawn from `Math.random` one byte at a time.
pub(crate) fn js_random_seed() -> u64 {
    let bytes: [u8; 8] = core::array::from_fn(|_| (256. * js_sys::Math::random()) as u8);
    u64::from_be_bytes(bytes)
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = window, js_name = confetti)]
    fn js_confetti(options: &JsValue) -> Result<JsValue, JsValue>;
}

/// Fire-and-forget confetti burst, a missing confetti script only gets logged.
pub(crate) fn celebrate() {
    let options = js_sys::Object::new();
    let colors = js_sys::Array::of3(
        &JsValue::from_str("#FDE047"),
        &JsValue::from_str("#F472B6"),
        &JsValue::from_str("#FB7185"),
    );
    let origin = js_sys::Object::new();

    let set = |target: &js_sys::Object, key: &str, value: &JsValue| {
        if let Err(err) = js_sys::Reflect::set(target, &JsValue::from_str(key), value) {
            log::error!("failed to set confetti option {}: {:?}", key, err);
        }
    };
    set(&origin, "y", &JsValue::from_f64(0.6));
    set(&options, "particleCount", &JsValue::from_f64(150.));
    set(&options, "spread", &JsValue::from_f64(70.));
    set(&options, "origin", &origin);
    set(&options, "colors", &colors);

    if let Err(err) = js_confetti(&options) {
        log::warn!("confetti unavailable: {:?}", err);
    }
}

/// `mm:ss` for the puzzle timer.
pub(crate) fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

pub trait HasUpdate {
    fn has_update(self) -> bool;
}

impl<E: std::fmt::Debug> HasUpdate for Result<flow::EntryOutcome, E> {
    fn has_update(self) -> bool {
        self.inspect_err(|err| log::debug!("entry ignored: {:?}", err))
            .map_or(false, |outcome| outcome.has_update())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_formats_minutes_and_seconds() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(75), "01:15");
        assert_eq!(format_clock(6000), "100:00");
    }

    #[test]
    fn errors_count_as_no_update() {
        let rejected: Result<flow::EntryOutcome, flow::FlowError> =
            Err(flow::FlowError::AlreadySolved);
        assert!(!rejected.has_update());
        assert!(Ok::<_, flow::FlowError>(flow::EntryOutcome::Mistake).has_update());
        assert!(!Ok::<_, flow::FlowError>(flow::EntryOutcome::NoChange).has_update());
    }
}
