use comfy_table::{ContentArrangement, Table};
use tarot_core::{Arcana, TarotError, search};

pub fn run(query: &str) -> Result<(), String> {
    let results = search(query);

    if results.is_empty() {
        return Err(TarotError::no_card_matching(query).to_string());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Arcana", "Upright", "Reversed"]);

    for card in &results {
        let arcana = match card.arcana {
            Arcana::Major { number } => format!("Major {number}"),
            Arcana::Minor { suit, .. } => format!("Minor ({suit})"),
        };
        table.add_row(vec![
            card.name.to_string(),
            arcana,
            card.upright_meaning.to_string(),
            card.reversed_meaning.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} card{} matching \"{}\"",
        results.len(),
        if results.len() == 1 { "" } else { "s" },
        query
    );

    Ok(())
}
