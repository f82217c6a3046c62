use std::collections::BTreeSet;

use serde::Serialize;

use super::public_asset_path;
use crate::models::Manifest;

/// Everything a page needs to reference to load one manifest entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EntryAssets {
    /// Public URL of the entry chunk itself.
    pub script: String,
    /// Stylesheets of the entry and all statically imported chunks.
    pub styles: Vec<String>,
    /// Statically imported chunks worth a `modulepreload` hint.
    pub preloads: Vec<String>,
}

impl EntryAssets {
    /// Render the tags for the document head: stylesheets, then the entry script, then
    /// module preloads.
    pub fn to_html(&self) -> String {
        let mut tags = Vec::with_capacity(self.styles.len() + self.preloads.len() + 1);
        for style in &self.styles {
            tags.push(format!(
                r#"<link rel="stylesheet" href="{}">"#,
                escape_attribute(style)
            ));
        }
        tags.push(format!(
            r#"<script type="module" src="{}"></script>"#,
            escape_attribute(&self.script)
        ));
        for preload in &self.preloads {
            tags.push(format!(
                r#"<link rel="modulepreload" href="{}">"#,
                escape_attribute(preload)
            ));
        }
        tags.join("\n")
    }
}

/// Resolve the script, stylesheets, and preloads for the manifest entry stored under `key`.
///
/// Static imports are followed depth-first, each chunk at most once, so import cycles are
/// harmless. Imports naming a key the manifest does not contain are skipped.
pub fn collect_entry_assets(manifest: &Manifest, key: &str, base: &str) -> Option<EntryAssets> {
    let entry = manifest.get(key)?;

    let mut walk = ImportWalk {
        manifest,
        base,
        visited: BTreeSet::from([key.to_string()]),
        seen_styles: BTreeSet::new(),
        assets: EntryAssets {
            script: public_asset_path(base, &entry.file),
            ..EntryAssets::default()
        },
    };

    walk.add_styles(entry.css());
    walk.follow(key, entry.imports());

    Some(walk.assets)
}

struct ImportWalk<'a> {
    manifest: &'a Manifest,
    base: &'a str,
    visited: BTreeSet<String>,
    seen_styles: BTreeSet<String>,
    assets: EntryAssets,
}

impl<'a> ImportWalk<'a> {
    fn follow(&mut self, importer: &str, imports: &'a [String]) {
        for import in imports {
            if !self.visited.insert(import.clone()) {
                continue;
            }

            let Some(chunk) = self.manifest.get(import) else {
                tracing::warn!(importer, import = %import, "manifest import has no entry");
                continue;
            };

            self.assets
                .preloads
                .push(public_asset_path(self.base, &chunk.file));
            self.add_styles(chunk.css());
            self.follow(import, chunk.imports());
        }
    }

    fn add_styles(&mut self, css: &[String]) {
        for file in css {
            let url = public_asset_path(self.base, file);
            if self.seen_styles.insert(url.clone()) {
                self.assets.styles.push(url);
            }
        }
    }
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest() -> Manifest {
        serde_json::from_str(
            r#"{
              "_shared-B7PI925R.js": {
                "file": "assets/shared-B7PI925R.js",
                "name": "shared",
                "css": ["assets/shared-ChJ_j-JJ.css"]
              },
              "_util-X1.js": {
                "file": "assets/util-X1.js",
                "imports": ["_shared-B7PI925R.js"]
              },
              "views/foo.js": {
                "file": "assets/foo-BRBmoGS9.js",
                "src": "views/foo.js",
                "isEntry": true,
                "imports": ["_shared-B7PI925R.js", "_util-X1.js"],
                "css": ["assets/foo-5UjPuW-k.css"]
              },
              "views/bar.js": {
                "file": "assets/bar-gkvgaI9m.js",
                "src": "views/bar.js",
                "isEntry": true,
                "imports": ["_missing.js", "views/bar.js"]
              }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn collects_transitive_styles_and_preloads() {
        let assets = collect_entry_assets(&manifest(), "views/foo.js", "/").unwrap();

        assert_eq!(assets.script, "/assets/foo-BRBmoGS9.js");
        assert_eq!(assets.styles, vec![
            "/assets/foo-5UjPuW-k.css".to_string(),
            "/assets/shared-ChJ_j-JJ.css".to_string(),
        ]);
        assert_eq!(assets.preloads, vec![
            "/assets/shared-B7PI925R.js".to_string(),
            "/assets/util-X1.js".to_string(),
        ]);
    }

    #[test]
    fn skips_missing_and_self_imports() {
        let assets = collect_entry_assets(&manifest(), "views/bar.js", "/").unwrap();

        assert_eq!(assets.script, "/assets/bar-gkvgaI9m.js");
        assert!(assets.styles.is_empty());
        assert!(assets.preloads.is_empty());
    }

    #[test]
    fn unknown_key_has_no_assets() {
        assert!(collect_entry_assets(&manifest(), "views/baz.js", "/").is_none());
    }

    #[test]
    fn respects_public_base() {
        let assets = collect_entry_assets(&manifest(), "views/foo.js", "/static/").unwrap();
        assert_eq!(assets.script, "/static/assets/foo-BRBmoGS9.js");
    }

    #[test]
    fn renders_head_tags() {
        let assets = EntryAssets {
            script: "/assets/foo.js".into(),
            styles: vec!["/assets/foo.css".into()],
            preloads: vec!["/assets/shared.js?v=\"1\"".into()],
        };

        assert_eq!(
            assets.to_html(),
            concat!(
                "<link rel=\"stylesheet\" href=\"/assets/foo.css\">\n",
                "<script type=\"module\" src=\"/assets/foo.js\"></script>\n",
                "<link rel=\"modulepreload\" href=\"/assets/shared.js?v=&quot;1&quot;\">",
            )
        );
    }
}
