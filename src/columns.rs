//! Heuristic resolution of spreadsheet headers to customer-record roles.
//!
//! Export files arrive with inconsistent headers, so each role is resolved
//! by an ordered rule chain: exact alias match, then separator-insensitive
//! alias match, then (for all roles but the customer name) a substring
//! search over known keyword fragments. The alias and keyword lists were
//! collected from the header variants seen in production exports.

/// Header of the required street address column.
pub const ADDRESS_COLUMN: &str = "RuaResidencial";

/// Known headers for the customer name column.
pub const NAME_ALIASES: &[&str] = &["Cliente", "Nome", "nome", "nome_cliente", "Nome_Cliente"];

/// Known headers for the customer code column.
pub const CODE_ALIASES: &[&str] = &[
    "Código",
    "Codigo",
    "codigo",
    "ID",
    "Id",
    "id",
    "ClienteID",
    "Cliente_ID",
    "Codigo_Cliente",
    "Cod",
    "CodigoRevendedor",
    "Codigo_Revendedor",
    "codigo_revendedor",
];

/// Known headers for the blocked-status column.
pub const BLOCKED_ALIASES: &[&str] = &["Bloqueado", "Bloqueio", "bloqueado", "bloqueio", "blocked"];

/// Known headers for the organizational-unit column.
pub const ORG_UNIT_ALIASES: &[&str] = &[
    "Estrutura",
    "Estrutra",
    "estrutura",
    "estrutra",
    "setor",
    "local",
    "EstruturaComercial",
    "Estrutura_Comercial",
    "estruturacomercial",
    "estrutura_comercial",
    "estrutura comercial",
];

/// Fragments accepted by the substring fallback for the code column.
pub const CODE_KEYWORDS: &[&str] = &["codigo", "cod", "id", "revendedor"];

/// Fragments accepted by the substring fallback for the blocked column.
pub const BLOCKED_KEYWORDS: &[&str] = &["bloquead", "bloqueio", "blocked"];

/// Fragments accepted by the substring fallback for the org-unit column.
pub const ORG_UNIT_KEYWORDS: &[&str] = &["estrut", "setor", "local", "centra"];

/// Column indices resolved for the auxiliary customer roles. An unresolved
/// role is not an error; downstream code emits empty values for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolvedRoles {
    pub name: Option<usize>,
    pub code: Option<usize>,
    pub blocked: Option<usize>,
    pub org_unit: Option<usize>,
}

/// Resolves every auxiliary role against the given headers.
pub fn resolve_roles(headers: &[String]) -> ResolvedRoles {
    ResolvedRoles {
        name: resolve_role(headers, NAME_ALIASES, &[]),
        code: resolve_role(headers, CODE_ALIASES, CODE_KEYWORDS),
        blocked: resolve_role(headers, BLOCKED_ALIASES, BLOCKED_KEYWORDS),
        org_unit: resolve_role(headers, ORG_UNIT_ALIASES, ORG_UNIT_KEYWORDS),
    }
}

/// Resolves one role. Rules run in order and the first match wins: exact
/// alias (alias-list order), normalized alias, then keyword substring.
pub fn resolve_role(headers: &[String], aliases: &[&str], keywords: &[&str]) -> Option<usize> {
    for alias in aliases {
        if let Some(index) = headers.iter().position(|header| header == alias) {
            return Some(index);
        }
    }

    let position = headers.iter().position(|header| {
        let normalized = normalize_header(header);
        aliases
            .iter()
            .any(|alias| normalize_header(alias) == normalized)
    });
    if position.is_some() {
        return position;
    }

    if keywords.is_empty() {
        return None;
    }
    headers.iter().position(|header| {
        let normalized = normalize_header(header);
        keywords.iter().any(|keyword| normalized.contains(keyword))
    })
}

fn normalize_header(header: &str) -> String {
    header.to_lowercase().replace(' ', "").replace('_', "")
}
