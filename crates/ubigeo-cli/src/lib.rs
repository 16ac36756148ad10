//! ubigeo-cli
//! ==========
//!
//! Command-line interface for the `ubigeo-core` resolver.
//!
//! This crate primarily provides a binary (`ubigeo`). The library target only
//! exists so the crate gets a rendered documentation page.
//!
//! Quick start
//! -----------
//!
//! ```text
//! ubigeo --help
//! ubigeo stats
//! ubigeo departamento 1 150101
//! ubigeo validar CUZCO HUANUCO
//! ```
//!
//! For programmatic access use the [`ubigeo-core`] crate directly.
//!
#![cfg_attr(docsrs, feature(doc_cfg))]
