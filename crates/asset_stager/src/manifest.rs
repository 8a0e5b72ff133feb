use std::path::PathBuf;

/// One copy rule: files under `cwd` matching any of `src` land under `dest`
/// at the same relative path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    pub name: String,
    pub cwd: PathBuf,
    pub src: Vec<String>,
    pub dest: PathBuf,
}

impl AssetEntry {
    pub fn new(
        name: impl Into<String>,
        cwd: impl Into<PathBuf>,
        src: &[&str],
        dest: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            cwd: cwd.into(),
            src: src.iter().map(|s| s.to_string()).collect(),
            dest: dest.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Manifest {
    /// Trees removed before anything is copied.
    pub clean: Vec<PathBuf>,
    pub strict: bool,
    pub entries: Vec<AssetEntry>,
}

impl Manifest {
    /// Vendor layout of the gateway admin UI: Font Awesome, Bootstrap, jQuery,
    /// SB Admin 2, Bootstrap Toggle, Select2, timeago and the page script.
    pub fn raziel_default() -> Self {
        Self {
            clean: vec![PathBuf::from("www")],
            strict: false,
            entries: vec![
                AssetEntry::new(
                    "font_awesome",
                    "assets/vendor/font-awesome",
                    &["css/font-awesome.min.css", "fonts/*"],
                    "www",
                ),
                AssetEntry::new(
                    "bootstrap",
                    "assets/vendor/bootstrap/dist",
                    &["css/bootstrap.min.css", "fonts/*", "js/bootstrap.min.js"],
                    "www",
                ),
                AssetEntry::new(
                    "jquery",
                    "assets/vendor/jquery/dist",
                    &["jquery.min.js"],
                    "www/js",
                ),
                AssetEntry::new(
                    "sb_admin",
                    "assets/vendor/sb-admin-2/dist",
                    &["css/sb-admin-2.css"],
                    "www",
                ),
                AssetEntry::new(
                    "bootstrap_toggle",
                    "assets/vendor/bootstrap-toggle",
                    &["css/bootstrap-toggle.min.css", "js/bootstrap-toggle.min.js"],
                    "www",
                ),
                AssetEntry::new(
                    "select2",
                    "assets/vendor/select2/dist",
                    &["css/select2.min.css", "js/select2.min.js"],
                    "www",
                ),
                AssetEntry::new(
                    "timeago",
                    "assets/vendor/timeago",
                    &["jquery.timeago.js"],
                    "www/js",
                ),
                AssetEntry::new("raziel", "assets", &["js/raziel.js"], "www"),
            ],
        }
    }
}
