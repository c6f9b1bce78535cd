use std::path::PathBuf;

use super::*;

const HEADER: &str = "algoritmo;cenario;tamanho;repeticao;tempo_ms;comparacoes;trocas\n";

fn read(content: &str) -> Result<Vec<InputRow>> {
    read_table_from(content.as_bytes(), &PathBuf::from("test.csv"))
}

#[test]
fn reads_rows_in_order() {
    let content = format!(
        "{HEADER}shellsort;crescente;100;1;5.0;300;50\nshellsort;crescente;100;2;7.0;320;60\n"
    );
    let rows = read(&content).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].algorithm, "shellsort");
    assert_eq!(rows[0].repetition, "1");
    assert_eq!(rows[1].time_ms, "7.0");
    assert_eq!(rows[1].swaps, "60");
}

#[test]
fn records_source_line_numbers() {
    let content = format!("{HEADER}a;b;1;1;1;1;1\na;b;2;1;1;1;1\n");
    let rows = read(&content).unwrap();
    assert_eq!(rows[0].line, 2);
    assert_eq!(rows[1].line, 3);
}

#[test]
fn empty_cells_stay_empty_strings() {
    let content = format!("{HEADER}cyclesort;aleatorio;100;;;;\n");
    let rows = read(&content).unwrap();
    assert_eq!(rows[0].repetition, "");
    assert_eq!(rows[0].time_ms, "");
}

#[test]
fn nan_token_is_kept_literally() {
    let content = format!("{HEADER}cyclesort;aleatorio;100;NaN;1;2;3\n");
    let rows = read(&content).unwrap();
    assert_eq!(rows[0].repetition, "NaN");
}

#[test]
fn short_records_are_padded_with_empty_cells() {
    let content = format!("{HEADER}cyclesort;aleatorio;100;1\n");
    let rows = read(&content).unwrap();
    assert_eq!(rows[0].repetition, "1");
    assert_eq!(rows[0].comparisons, "");
    assert_eq!(rows[0].swaps, "");
}

#[test]
fn columns_are_located_by_name() {
    let content = "trocas;comparacoes;tempo_ms;repeticao;tamanho;cenario;algoritmo;extra\n\
                   50;300;5.0;1;100;crescente;shellsort;ignored\n";
    let rows = read(content).unwrap();
    assert_eq!(rows[0].algorithm, "shellsort");
    assert_eq!(rows[0].scenario, "crescente");
    assert_eq!(rows[0].swaps, "50");
}

#[test]
fn utf8_bom_on_first_header_is_ignored() {
    let content = format!("\u{feff}{HEADER}shellsort;crescente;100;1;5.0;300;50\n");
    let rows = read(&content).unwrap();
    assert_eq!(rows.len(), 1);
}

#[test]
fn missing_column_is_an_error() {
    let content = "algoritmo;cenario;tamanho;repeticao;tempo_ms;comparacoes\nx;y;1;1;1;1\n";
    let err = read(content).unwrap_err();
    match err {
        SortbenchError::MissingColumn { column, .. } => assert_eq!(column, "trocas"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn header_only_table_has_no_rows() {
    assert!(read(HEADER).unwrap().is_empty());
}

#[test]
fn missing_file_reports_path() {
    let err = read_table(&PathBuf::from("/definitely/not/here.csv")).unwrap_err();
    assert!(matches!(err, SortbenchError::FileRead { .. }));
    assert!(err.to_string().contains("here.csv"));
}
