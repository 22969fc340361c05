use std::path::Path;
use std::sync::LazyLock;
use regex::Regex;

use super::ParseError;

/// `require('x')`, `from 'x'` and `import 'x'`, capturing `x` only when it
/// does not start with `.`, `/` or `\`.
static MODULE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:require\(|from |import )['"]([a-zA-Z0-9_@\-][a-zA-Z0-9_@\-/]*)['"]"#)
        .expect("MODULE_PATTERN regex is invalid")
});

/// Every external module reference in `source`, in text order, duplicates kept.
///
/// Matching is lexical, so commented-out imports and look-alike string
/// literals are reported too.
pub fn extract_module_names(source: &str) -> impl Iterator<Item = &str> {
    MODULE_PATTERN
        .captures_iter(source)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
}

/// Reads `path` as UTF-8 text. The handle is closed before returning.
pub fn read_source(path: &Path) -> Result<String, ParseError> {
    let bytes = std::fs::read(path)?;
    String::from_utf8(bytes).map_err(|_| ParseError::DecodeError)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sources(code: &str) -> Vec<String> {
        extract_module_names(code).map(String::from).collect()
    }

    #[test]
    fn test_require() {
        assert_eq!(sources(r#"const express = require("express");"#), vec!["express"]);
    }

    #[test]
    fn test_from_import() {
        assert_eq!(sources(r#"import React, { useState } from 'react';"#), vec!["react"]);
    }

    #[test]
    fn test_side_effect_import() {
        assert_eq!(sources(r#"import 'reflect-metadata';"#), vec!["reflect-metadata"]);
    }

    #[test]
    fn test_re_export_uses_from() {
        assert_eq!(sources(r#"export * from "zod";"#), vec!["zod"]);
    }

    #[test]
    fn test_relative_imports_skipped() {
        let code = r#"
            import a from './local';
            import b from '../sibling';
            import c from '/abs/path';
            const d = require("..\\win");
            import e from 'lodash';
        "#;
        assert_eq!(sources(code), vec!["lodash"]);
    }

    #[test]
    fn test_scoped_and_subpath() {
        let code = r#"
            const { PrismaClient } = require('@prisma/client');
            import Image from "next/image";
        "#;
        assert_eq!(sources(code), vec!["@prisma/client", "next/image"]);
    }

    #[test]
    fn test_duplicates_kept() {
        let code = "import a from 'axios';\nconst b = require('axios');";
        assert_eq!(sources(code), vec!["axios", "axios"]);
    }

    #[test]
    fn test_non_identifier_chars_not_matched() {
        // `.` is outside the identifier class, so the literal never closes
        assert!(sources(r#"require("lodash.debounce")"#).is_empty());
        assert!(sources(r#"import x from 'pkg?raw';"#).is_empty());
    }

    #[test]
    fn test_exact_spacing_required() {
        assert!(sources(r#"require ('express')"#).is_empty());
        assert!(sources(r#"import x from  'react'"#).is_empty());
        assert!(sources(r#"import('react')"#).is_empty());
    }

    #[test]
    fn test_comment_is_still_matched() {
        assert_eq!(sources("// import 'left-pad'"), vec!["left-pad"]);
    }

    #[test]
    fn test_unbalanced_quote_is_tolerated() {
        assert!(sources("import x from 'react\nconst y = 1;").is_empty());
    }

    #[test]
    fn test_read_source_invalid_utf8() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.js");
        std::fs::write(&path, b"fr\xff\xfe\x00").unwrap();
        assert!(matches!(read_source(&path), Err(ParseError::DecodeError)));
    }

    #[test]
    fn test_read_source_missing() {
        let temp = TempDir::new().unwrap();
        let result = read_source(&temp.path().join("gone.js"));
        assert!(matches!(result, Err(ParseError::IoError(_))));
    }
}
