use crate::{
    interfaces::ScanContext,
    parser::ClassIndex,
    types::{AssetFolderListing, ModuleInfo, ParameterDescriptor, TextRange},
    utils::LineIndex,
};

/// Trait for one extraction pass over a document.
///
/// Passes run in a fixed order against the same [`ScanState`]; a later pass
/// may annotate descriptors an earlier pass produced.
pub trait ScanPass {
    fn name(&self) -> &'static str;
    fn scan(&self, state: &mut ScanState<'_>);
}

/// Everything the passes of a single scan share
pub struct ScanState<'a> {
    pub text: &'a str,
    pub lines: LineIndex,
    pub classes: ClassIndex,
    pub context: &'a ScanContext<'a>,
    pub parameters: Vec<ParameterDescriptor>,
    pub module_info: ModuleInfo,
    pub asset_folders: AssetFolderListing,
}

impl<'a> ScanState<'a> {
    pub fn new(text: &'a str, context: &'a ScanContext<'a>) -> Self {
        let lines = LineIndex::new(text);
        let classes = ClassIndex::build(text, &lines);
        Self {
            text,
            lines,
            classes,
            context,
            parameters: Vec::new(),
            module_info: ModuleInfo::default(),
            asset_folders: AssetFolderListing::new(),
        }
    }

    pub fn range(&self, start: usize, end: usize) -> TextRange {
        self.lines.range(self.text, start, end)
    }

    /// Apply `annotate` to every descriptor collected so far for `class_name`
    pub fn annotate_class(&mut self, class_name: &str, mut annotate: impl FnMut(&mut ParameterDescriptor)) {
        self.parameters
            .iter_mut()
            .filter(|p| p.class_name == class_name)
            .for_each(|p| annotate(p));
    }
}
