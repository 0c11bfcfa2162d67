use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, trace};

use crate::patterns::{ScanPass, ScanState};

static IMG_PROPERTY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)@property\s+.*?def\s+img\s*\(\s*self\s*\).*?return\s+([^#\r\n]+)").unwrap()
});
static IMAGES_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"images\s*\[\s*['"]([^'"]+)['"]\s*\]"#).unwrap());

/// `@property def img(self)` accessors returning an `Assets ... images['key']`
/// expression tag their class with the image folder key
pub struct ImagePropertyPass;

impl ScanPass for ImagePropertyPass {
    fn name(&self) -> &'static str {
        "image-properties"
    }

    fn scan(&self, state: &mut ScanState<'_>) {
        let mut tagged = 0;

        for caps in IMG_PROPERTY_RE.captures_iter(state.text) {
            let Some(whole) = caps.get(0) else { continue };
            let returned = caps[1].trim();
            let line = state.lines.line_of(whole.start());
            let Some(class) = state.classes.enclosing(line) else {
                continue;
            };

            if !(returned.contains("Assets") && returned.contains("images")) {
                continue;
            }
            let Some(folder) = IMAGES_KEY_RE.captures(returned).map(|c| c[1].to_string()) else {
                continue;
            };

            trace!("class {} draws from image folder '{}'", class.name, folder);
            let class_name = class.name.clone();
            state.annotate_class(&class_name, |p| p.image_folder = Some(folder.clone()));
            tagged += 1;
        }

        debug!("{}: {} image properties", self.name(), tagged);
    }
}
