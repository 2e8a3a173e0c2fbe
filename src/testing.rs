//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

use crate::types::{Catalog, CatalogEntry};

/// Create a catalog entry.
///
/// This is the canonical implementation used across all tests.
pub fn make_entry(id: &str, name: &str, description: &str, category: &str) -> CatalogEntry {
    CatalogEntry::new(id, name, description, category)
}

/// Entries of the sample catalog, in declared order.
pub const SAMPLE_ENTRIES: &[(&str, &str, &str, &str)] = &[
    ("cpf-generator", "Gerador CPF", "Gera números de documento para testes", "GERADORES"),
    ("cnpj-generator", "Gerador CNPJ", "Gera números de empresa para testes", "GERADORES"),
    ("hash-generator", "Gerador de Hash", "Gera hashes MD5, SHA256", "GERADORES"),
    ("uuid-generator", "Gerador UUID", "Identificadores únicos universais", "GERADORES"),
    ("cpf-validator", "Validador CPF", "Verifica se um documento é válido", "VALIDADORES"),
    ("cnpj-validator", "Validador CNPJ", "Confere os dígitos verificadores", "VALIDADORES"),
    ("base64", "Conversor Base64", "Codifica e decodifica texto", "CONVERSORES"),
    ("unit-converter", "Conversor de Unidades", "Comprimento, massa e volume", "CONVERSORES"),
    ("compound-interest", "Calculadora de Juros Compostos", "Simula investimentos", "CALCULADORAS"),
    ("bmi", "Calculadora de IMC", "Índice de massa corporal", "CALCULADORAS"),
];

/// A small catalog with four categories:
/// GERADORES, VALIDADORES, CONVERSORES, CALCULADORAS.
pub fn sample_catalog() -> Catalog {
    Catalog::from_entries(
        SAMPLE_ENTRIES
            .iter()
            .map(|&(id, name, description, category)| make_entry(id, name, description, category)),
    )
    .expect("sample catalog ids are unique")
}
