//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# tinct configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[palette]
# capacity = 12                # 1-64 saved colors
# storage_key = "savedColors"  # letters, digits, '_' and '-'
# store_dir = "/path/to/dir"   # defaults to the platform data directory

[logging]
# level = "warn"               # trace | debug | info | warn | error
"##
}
