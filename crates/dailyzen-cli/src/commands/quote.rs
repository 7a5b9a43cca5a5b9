use dailyzen_core::quotes;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let quote = quotes::quote_of_the_day();
    println!("\"{}\"", quote.text);
    println!("    -- {}", quote.author);
    Ok(())
}
