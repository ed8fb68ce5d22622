#![allow(dead_code)]

use serde_json::json;
use transcrito_core::{Book, Corpus};

/// Book whose chapter `c` holds `lengths[c - 1]` verses named `"<abbrev> c:v"`.
pub fn book_with_lengths(abbrev: &str, lengths: &[usize]) -> Book {
    let chapters = lengths
        .iter()
        .enumerate()
        .map(|(chapter, len)| {
            (1..=*len)
                .map(|verse| format!("{abbrev} texto {}:{verse}", chapter + 1))
                .collect()
        })
        .collect();
    Book::new(abbrev, chapters)
}

/// Two translations: NVI has `jo` and `rt`; ACF has only `rt`.
pub fn sample_corpus() -> Corpus {
    let nvi = json!([
        {"abbrev": "rt", "chapters": [["Rute 1a", "Rute 1b"], ["Rute 2a"]]},
        {"abbrev": "jo", "chapters": [
            ["No princípio era aquele que é a Palavra.", "Ele estava com Deus no princípio."],
            ["No terceiro dia houve um casamento em Caná.", "Jesus e seus discípulos foram convidados."],
            ["Havia um fariseu chamado Nicodemos.", "Ele veio a Jesus, à noite.", "Em resposta, Jesus declarou."]
        ]}
    ]);
    let acf = json!([
        {"abbrev": "rt", "chapters": [["Ruth 1a", "Ruth 1b"], ["Ruth 2a"]]}
    ]);

    let mut corpus = Corpus::new();
    corpus
        .insert_translation_json("NVI", &nvi.to_string())
        .unwrap();
    corpus
        .insert_translation_json("ACF", &acf.to_string())
        .unwrap();
    corpus
}
