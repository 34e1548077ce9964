use super::*;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlElement, Request, RequestCache, RequestInit, Response};

fn js_error_to_string(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}

fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

fn element_by_id(id: &str) -> Option<Element> {
    document().and_then(|document| document.get_element_by_id(id))
}

pub async fn fetch_json(path: &str) -> Result<Value, ContentError> {
    let transport = |err: JsValue| ContentError::Transport {
        path: path.to_string(),
        message: js_error_to_string(err),
    };
    let parse = |err: JsValue| ContentError::Parse {
        path: path.to_string(),
        message: js_error_to_string(err),
    };

    let window = web_sys::window().ok_or_else(|| ContentError::Transport {
        path: path.to_string(),
        message: "no browser window".to_string(),
    })?;

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_cache(RequestCache::NoStore);
    let request = Request::new_with_str_and_init(path, &init).map_err(transport)?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?
        .dyn_into()
        .map_err(transport)?;
    if !response.ok() {
        return Err(ContentError::Load {
            path: path.to_string(),
            status: response.status(),
        });
    }

    let body = JsFuture::from(response.json().map_err(parse)?)
        .await
        .map_err(parse)?;
    serde_wasm_bindgen::from_value(body).map_err(|err| ContentError::Parse {
        path: path.to_string(),
        message: err.to_string(),
    })
}

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub fn set_root_css_variable(name: &str, value: &str) {
    let Some(root) = document().and_then(|document| document.document_element()) else {
        return;
    };
    let Ok(root) = root.dyn_into::<HtmlElement>() else {
        return;
    };
    let _ = root.style().set_property(name, value);
}

pub fn set_element_text(id: &str, text: &str) -> bool {
    let Some(element) = element_by_id(id) else {
        return false;
    };
    element.set_text_content(Some(text));
    true
}

pub fn set_element_attribute(id: &str, name: &str, value: &str) -> bool {
    let Some(element) = element_by_id(id) else {
        return false;
    };
    element.set_attribute(name, value).is_ok()
}

pub fn hide_element(id: &str) -> bool {
    let Some(element) = element_by_id(id) else {
        return false;
    };
    let Ok(element) = element.dyn_into::<HtmlElement>() else {
        return false;
    };
    element.style().set_property("display", "none").is_ok()
}

fn create_child(
    document: &Document,
    parent: &Element,
    tag: &str,
    class: Option<&str>,
) -> Option<Element> {
    let element = document.create_element(tag).ok()?;
    if let Some(class) = class {
        element.set_class_name(class);
    }
    parent.append_child(&element).ok()?;
    Some(element)
}

pub fn replace_nav_links(id: &str, links: &[NavLinkView]) -> bool {
    let Some(document) = document() else {
        return false;
    };
    let Some(nav) = document.get_element_by_id(id) else {
        return false;
    };
    nav.set_inner_html("");

    for link in links {
        let Some(anchor) = create_child(&document, &nav, "a", None) else {
            continue;
        };
        if let Some(href) = &link.href {
            let _ = anchor.set_attribute("href", href);
        }
        anchor.set_text_content(Some(&link.label));
        if link.active {
            let _ = anchor.class_list().add_1("active");
        }
    }
    true
}

pub fn replace_tile_cards(id: &str, cards: &[TileCardView]) -> bool {
    let Some(document) = document() else {
        return false;
    };
    let Some(tiles) = document.get_element_by_id(id) else {
        return false;
    };
    tiles.set_inner_html("");

    for card in cards {
        let Some(card_el) = create_child(&document, &tiles, "div", Some("card")) else {
            continue;
        };
        if let Some(heading) = create_child(&document, &card_el, "h3", None) {
            heading.set_text_content(Some(&card.heading));
        }
        if let Some(text) = create_child(&document, &card_el, "p", None) {
            text.set_text_content(Some(&card.text));
        }
        let Some(actions) = create_child(&document, &card_el, "div", None) else {
            continue;
        };
        let _ = actions.set_attribute("style", "margin-top:12px;");
        if let Some(button) = create_child(&document, &actions, "a", Some("btn")) {
            let _ = button.set_attribute("href", &card.href);
            button.set_text_content(Some(&card.link_label));
        }
    }
    true
}
