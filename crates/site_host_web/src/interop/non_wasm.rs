use super::*;

fn unsupported() -> String {
    "Browser fetch is only available when compiled for wasm32".to_string()
}

pub async fn fetch_json(path: &str) -> Result<Value, ContentError> {
    Err(ContentError::Transport {
        path: path.to_string(),
        message: unsupported(),
    })
}

pub fn current_path() -> String {
    "/".to_string()
}

pub fn set_root_css_variable(_name: &str, _value: &str) {}

pub fn set_element_text(_id: &str, _text: &str) -> bool {
    false
}

pub fn set_element_attribute(_id: &str, _name: &str, _value: &str) -> bool {
    false
}

pub fn hide_element(_id: &str) -> bool {
    false
}

pub fn replace_nav_links(_id: &str, _links: &[NavLinkView]) -> bool {
    false
}

pub fn replace_tile_cards(_id: &str, _cards: &[TileCardView]) -> bool {
    false
}
