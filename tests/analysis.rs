use address_report::analyze::{self, DUPLICATE_LABEL, UNIQUE_LABEL};
use address_report::columns::{self, CODE_ALIASES, NAME_ALIASES};
use address_report::normalize::normalize_text;

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn normalizer_strips_accents_case_and_whitespace() {
    assert_eq!(normalize_text("  Rua São João  "), "rua sao joao");
    assert_eq!(normalize_text("AVENIDA CENTRAL"), "avenida central");
    assert_eq!(normalize_text(""), "");
}

#[test]
fn normalizer_is_idempotent() {
    let once = normalize_text("Praça da Sé");
    assert_eq!(normalize_text(&once), once);
}

#[test]
fn resolves_roles_by_exact_alias() {
    let headers = owned(&[
        "RuaResidencial",
        "Cliente",
        "CodigoRevendedor",
        "Bloqueado",
        "Estrutura",
    ]);
    let roles = columns::resolve_roles(&headers);
    assert_eq!(roles.name, Some(1));
    assert_eq!(roles.code, Some(2));
    assert_eq!(roles.blocked, Some(3));
    assert_eq!(roles.org_unit, Some(4));
}

#[test]
fn exact_match_follows_alias_list_order() {
    // "ID" precedes "Codigo_Cliente" in the alias list, so it wins even
    // though the other header appears first in the sheet.
    let headers = owned(&["Codigo_Cliente", "ID"]);
    assert_eq!(columns::resolve_role(&headers, CODE_ALIASES, &[]), Some(1));
}

#[test]
fn resolves_name_by_normalized_header() {
    let headers = owned(&["rua", "NOME_CLIENTE"]);
    assert_eq!(columns::resolve_role(&headers, NAME_ALIASES, &[]), Some(1));
}

#[test]
fn resolves_code_by_keyword_fragment() {
    let headers = owned(&["Endereco", "Cod. do Revendedor"]);
    assert_eq!(
        columns::resolve_role(&headers, CODE_ALIASES, columns::CODE_KEYWORDS),
        Some(1)
    );
}

#[test]
fn name_role_has_no_keyword_fallback() {
    let headers = owned(&["Nome do Cliente"]);
    let roles = columns::resolve_roles(&headers);
    assert_eq!(roles.name, None);
}

#[test]
fn resolution_is_deterministic() {
    let headers = owned(&["Setor Comercial", "nome cliente", "cod_rev", "bloqueio?"]);
    assert_eq!(
        columns::resolve_roles(&headers),
        columns::resolve_roles(&headers)
    );
}

#[test]
fn labels_duplicates_and_counts_groups() {
    let addresses = owned(&["Rua A", "rua a ", "Rua B", "RUA A", "Rua B", "Rua C"]);
    let analysis = analyze::analyze_addresses(&addresses, 10);

    assert_eq!(analysis.label(0), DUPLICATE_LABEL);
    assert_eq!(analysis.label(2), DUPLICATE_LABEL);
    assert_eq!(analysis.label(5), UNIQUE_LABEL);
    assert_eq!(analysis.repeat_count(0), 3);
    assert_eq!(analysis.repeat_count(2), 2);
    assert_eq!(analysis.repeat_count(5), 1);

    let ranked: Vec<(&str, usize)> = analysis
        .top
        .iter()
        .map(|entry| (entry.address.as_str(), entry.count))
        .collect();
    assert_eq!(ranked, vec![("rua a", 3), ("rua b", 2), ("rua c", 1)]);
}

#[test]
fn ranking_breaks_ties_by_first_encountered_order() {
    let addresses = owned(&["Rua B", "Rua A", "Rua A", "Rua B"]);
    let analysis = analyze::analyze_addresses(&addresses, 10);
    assert_eq!(analysis.top[0].address, "rua b");
    assert_eq!(analysis.top[1].address, "rua a");
}

#[test]
fn ranking_truncates_to_top_n() {
    let addresses = owned(&["a", "a", "b", "b", "c"]);
    let analysis = analyze::analyze_addresses(&addresses, 2);
    assert_eq!(analysis.top.len(), 2);
    assert_eq!(analysis.top[0].count, 2);
    assert_eq!(analysis.top[1].count, 2);
}

#[test]
fn blank_addresses_never_enter_the_ranking() {
    let addresses = owned(&["", "   ", "Rua A"]);
    let analysis = analyze::analyze_addresses(&addresses, 10);

    assert_eq!(analysis.top.len(), 1);
    assert_eq!(analysis.top[0].address, "rua a");
    // Blank rows still group with each other for the per-row annotations.
    assert_eq!(analysis.repeat_count(0), 2);
    assert_eq!(analysis.label(0), DUPLICATE_LABEL);
}
