use std::io;

use iri_parts::Iri;

fn main() {
    let mut buf = String::new();
    loop {
        buf.clear();
        let n = io::stdin()
            .read_line(&mut buf)
            .expect("failed to read line");
        if n == 0 {
            break;
        }
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }

        let iri = Iri::parse(buf.as_str());
        println!("{iri:#?}");
        println!("absolute: {}", iri.is_absolute());
    }
}
