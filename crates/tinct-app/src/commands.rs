//! Command handlers. Output goes to the supplied writer so handlers can be
//! driven from tests.

use std::io::Write;

use tinct_color::ColorFields;
use tinct_common::TinctError;
use tinct_palette::{KeyValueStore, PaletteStore};

use crate::cli::PaletteCommand;

pub fn convert<W: Write>(input: &str, json: bool, out: &mut W) -> Result<(), TinctError> {
    let fields = ColorFields::parse(input)?;

    if json {
        let text = serde_json::to_string_pretty(&fields)
            .map_err(|e| TinctError::Other(format!("failed to serialize fields: {e}")))?;
        writeln!(out, "{text}")?;
    } else {
        writeln!(out, "HEX  {}", fields.hex)?;
        writeln!(out, "RGB  {}", fields.rgb)?;
        writeln!(out, "HSL  {}", fields.hsl)?;
    }
    Ok(())
}

pub fn palette<S: KeyValueStore, W: Write>(
    store: &mut PaletteStore<S>,
    command: &PaletteCommand,
    out: &mut W,
) -> Result<(), TinctError> {
    match command {
        PaletteCommand::List => {
            if store.is_empty() {
                writeln!(out, "no saved colors")?;
            }
            for (index, color) in store.list().iter().enumerate() {
                writeln!(out, "{index:>2}  {color}")?;
            }
        }
        PaletteCommand::Add { color } => {
            let hex = ColorFields::parse(color)?.hex;
            if store.add(&hex)? {
                writeln!(out, "saved {hex}")?;
            } else {
                writeln!(out, "{hex} is already saved")?;
            }
        }
        PaletteCommand::Remove { index } => match store.remove_at(*index)? {
            Some(color) => writeln!(out, "removed {color}")?,
            None => writeln!(out, "no saved color at index {index}")?,
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinct_common::ColorError;
    use tinct_palette::MemoryStore;

    fn run_convert(input: &str, json: bool) -> Result<String, TinctError> {
        let mut out = Vec::new();
        convert(input, json, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn run_palette(store: &mut PaletteStore<MemoryStore>, command: PaletteCommand) -> String {
        let mut out = Vec::new();
        palette(store, &command, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn convert_hex_prints_all_fields() {
        let out = run_convert("#f00", false).unwrap();
        assert_eq!(out, "HEX  #FF0000\nRGB  rgb(255, 0, 0)\nHSL  hsl(0, 100%, 50%)\n");
    }

    #[test]
    fn convert_rgb_input() {
        let out = run_convert("rgb(171, 205, 239)", false).unwrap();
        assert!(out.starts_with("HEX  #ABCDEF\n"));
    }

    #[test]
    fn convert_json() {
        let out = run_convert("hsl(120, 100%, 25%)", true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["hex"], "#008000");
        assert_eq!(value["rgb"], "rgb(0, 128, 0)");
    }

    #[test]
    fn convert_rejects_unknown_format() {
        let err = run_convert("tomato", false).unwrap_err();
        assert!(matches!(err, TinctError::Color(ColorError::InvalidFormat(_))));
    }

    #[test]
    fn convert_reports_range_errors() {
        let err = run_convert("rgb(256, 0, 0)", false).unwrap_err();
        assert!(matches!(err, TinctError::Color(ColorError::InvalidRange(_))));
    }

    #[test]
    fn palette_add_canonicalizes_and_lists() {
        let mut store = PaletteStore::open(MemoryStore::new());

        assert_eq!(
            run_palette(&mut store, PaletteCommand::Add { color: "#f00".into() }),
            "saved #FF0000\n"
        );
        assert_eq!(
            run_palette(&mut store, PaletteCommand::Add { color: "rgb(255, 0, 0)".into() }),
            "#FF0000 is already saved\n"
        );
        run_palette(&mut store, PaletteCommand::Add { color: "#00ff00".into() });

        assert_eq!(
            run_palette(&mut store, PaletteCommand::List),
            " 0  #00FF00\n 1  #FF0000\n"
        );
    }

    #[test]
    fn palette_list_empty() {
        let mut store = PaletteStore::open(MemoryStore::new());
        assert_eq!(run_palette(&mut store, PaletteCommand::List), "no saved colors\n");
    }

    #[test]
    fn palette_remove() {
        let mut store = PaletteStore::open(MemoryStore::new());
        store.add("#FF0000").unwrap();

        assert_eq!(
            run_palette(&mut store, PaletteCommand::Remove { index: 5 }),
            "no saved color at index 5\n"
        );
        assert_eq!(
            run_palette(&mut store, PaletteCommand::Remove { index: 0 }),
            "removed #FF0000\n"
        );
        assert!(store.is_empty());
    }

    #[test]
    fn palette_add_invalid_color_leaves_store_alone() {
        let mut store = PaletteStore::open(MemoryStore::new());
        let mut out = Vec::new();
        let err = palette(
            &mut store,
            &PaletteCommand::Add { color: "#12G456".into() },
            &mut out,
        )
        .unwrap_err();
        assert!(matches!(err, TinctError::Color(_)));
        assert!(store.is_empty());
    }
}
