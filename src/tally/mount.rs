use core::fmt;

use web_sys::{Document, Element};

pub const DEFAULT_MOUNT_ID: &str = "root";

type Result<T> = std::result::Result<T, MountError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountError {
    id: String,
}

impl MountError {
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no element with id \"{}\" to mount into", self.id)
    }
}

impl std::error::Error for MountError {}

/// Finds the element the page is rendered into.
pub fn mount_target(document: &Document, id: &str) -> Result<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| MountError { id: id.to_string() })
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo::utils::{body, document};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn finds_existing_element() {
        let div = document().create_element("div").unwrap();
        div.set_id("mount_present");
        body().append_child(&div).unwrap();

        let found = mount_target(&document(), "mount_present").unwrap();
        assert_eq!(found.id(), "mount_present");

        div.remove();
    }

    #[wasm_bindgen_test]
    fn missing_element_is_an_error() {
        let err = mount_target(&document(), "mount_absent").unwrap_err();
        assert_eq!(err.id(), "mount_absent");
    }
}
