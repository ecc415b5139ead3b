//! Page access through `web-sys`.

use terrarium_app::config::DashboardConfig;
use terrarium_app::error::RenderError;
use terrarium_app::ports::DisplaySurface;
use web_sys::{Document, Element};

/// Id of the optional inline element carrying a TOML dashboard config.
const CONFIG_ELEMENT_ID: &str = "terrarium-config";

/// [`DisplaySurface`] writing into the live document.
#[derive(Debug, Clone)]
pub struct DomSurface {
    document: Document,
}

impl DomSurface {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Look up an element, reporting a missing one instead of failing.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::MissingElement`] when no element has this id.
    pub fn element(&self, element_id: &str) -> Result<Element, RenderError> {
        self.document
            .get_element_by_id(element_id)
            .ok_or_else(|| RenderError::MissingElement(element_id.to_string()))
    }
}

impl DisplaySurface for DomSurface {
    fn set_text(&self, element_id: &str, text: &str) -> Result<(), RenderError> {
        self.element(element_id)?.set_text_content(Some(text));
        Ok(())
    }

    fn set_class(&self, element_id: &str, class: &str, present: bool) -> Result<(), RenderError> {
        let classes = self.element(element_id)?.class_list();
        let result = if present {
            classes.add_1(class)
        } else {
            classes.remove_1(class)
        };
        result.map_err(|err| RenderError::Dom {
            element_id: element_id.to_string(),
            message: format!("{err:?}"),
        })
    }
}

/// Read the dashboard config embedded in the page, if any.
///
/// A page without a `#terrarium-config` element uses the defaults. An invalid
/// document is logged and the defaults are used as well.
pub fn load_config(document: &Document) -> DashboardConfig {
    let Some(content) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return DashboardConfig::default();
    };

    match DashboardConfig::from_toml_str(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(error = %err, "invalid dashboard config, using defaults");
            DashboardConfig::default()
        }
    }
}
