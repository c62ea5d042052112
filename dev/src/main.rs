use log::info;
use typescribe::{
    compare_words, render_original_comparison, render_typed_comparison, Language, PassageCatalog,
};

fn main() -> Result<(), typescribe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let catalog = PassageCatalog::load_embedded()?;
    info!("Loaded {} sample passages", catalog.len());

    for passage in catalog.iter() {
        // Drop every seventh word to simulate a hurried attempt
        let typed_text = passage
            .content
            .split(' ')
            .enumerate()
            .filter(|(idx, _)| idx % 7 != 6)
            .map(|(_, word)| word)
            .collect::<Vec<_>>()
            .join(" ");

        let comparison = compare_words(&passage.content, &typed_text);

        println!("== {} ({})", passage.title, passage.language);
        println!("{}", render_original_comparison(&comparison.original_comparison));
        println!("{}", render_typed_comparison(&comparison.typed_comparison));
        println!("{:?}", comparison.stats);
    }

    if catalog.get(Language::Hindi).is_none() {
        info!("No Hindi passage in the catalog");
    }

    Ok(())
}
