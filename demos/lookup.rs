use rustyline::DefaultEditor;

use cepuf::*;

fn main() {
    for cep in ["59064330", "01001-000", "69900-000", "88000000", "90010-320", "123"] {
        println!("{cep} -> {}", uf_from_cep(cep));
    }

    let mut rl = DefaultEditor::new().expect("Failed to init editor");
    while let Ok(ref line) = rl.readline(">> ") {
        println!("uf_from_cep({line}) == {:?}", uf_from_cep(line.as_str()));
        match try_uf_from_cep(line.as_str()) {
            Ok(uf) => println!("try_uf_from_cep({line}) == {uf} ({})", uf.name()),
            Err(e) => println!("try_uf_from_cep({line}) == error: {e}"),
        }
        rl.add_history_entry(line).expect("Failed to save history");
    }
}
