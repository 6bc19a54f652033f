use comfy_table::{ContentArrangement, Table};
use gx_core::all_hexagrams;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "", "Name", "Nature", "Upper", "Lower"]);

    for h in all_hexagrams() {
        let upper = h.upper_trigram().map(|t| t.name()).unwrap_or("?");
        let lower = h.lower_trigram().map(|t| t.name()).unwrap_or("?");
        let number = h
            .king_wen_number()
            .map(|n| n.to_string())
            .unwrap_or_default();
        table.add_row(vec![number.as_str(), h.symbol, h.name, h.nature, upper, lower]);
    }

    println!("{table}");
    println!();
    println!("  {} hexagrams", all_hexagrams().len());

    Ok(())
}
