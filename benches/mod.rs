#![cfg(unstable)]
#![feature(test)]
extern crate test;

use std::str;

#[bench]
fn read_web_app(b: &mut test::Bencher) {
    let input = include_str!("../cases/web_app.json");

    b.bytes = input.len() as u64;
    b.iter(|| wheel_json::read(input).unwrap())
}

#[bench]
fn read_web_app_value_serde_json(b: &mut test::Bencher) {
    let input = include_str!("../cases/web_app.json");

    b.bytes = input.len() as u64;
    b.iter(|| {
        let v: serde_json::Value = serde_json::from_str(input).unwrap();
        v
    })
}

#[bench]
fn read_web_app_value_json(b: &mut test::Bencher) {
    let input = include_str!("../cases/web_app.json");

    b.bytes = input.len() as u64;
    b.iter(|| {
        let v: json::JsonValue = json::parse(input).unwrap();
        v
    })
}

#[bench]
fn read_web_app_value_simd_json(b: &mut test::Bencher) {
    let input = include_bytes!("../cases/web_app.json");

    b.bytes = input.len() as u64;
    b.iter(|| {
        let mut input = input.to_vec();
        let v = simd_json::to_borrowed_value(&mut input).unwrap();
        test::black_box(v);
    })
}

#[bench]
fn read_web_app_validate_utf8(b: &mut test::Bencher) {
    let input = include_bytes!("../cases/web_app.json");

    b.bytes = input.len() as u64;
    b.iter(|| str::from_utf8(input).unwrap())
}

#[bench]
fn read_glossary(b: &mut test::Bencher) {
    let input = include_str!("../cases/glossary.json");

    b.bytes = input.len() as u64;
    b.iter(|| wheel_json::read(input).unwrap())
}

#[bench]
fn read_glossary_value_serde_json(b: &mut test::Bencher) {
    let input = include_str!("../cases/glossary.json");

    b.bytes = input.len() as u64;
    b.iter(|| {
        let v: serde_json::Value = serde_json::from_str(input).unwrap();
        v
    })
}

#[bench]
fn read_web_app_sparse(b: &mut test::Bencher) {
    let input = include_str!("../cases/web_app.json");

    b.bytes = input.len() as u64;
    b.iter(|| {
        let doc = wheel_json::read(input).unwrap();

        let servlets = doc.get("web-app").unwrap().get("servlet").unwrap();

        servlets.elements().unwrap()[0]
            .get("servlet-name")
            .unwrap()
            .value_as::<String>()
            .unwrap()
    })
}

#[bench]
fn read_web_app_serde_json_sparse(b: &mut test::Bencher) {
    let input = include_str!("../cases/web_app.json");

    b.bytes = input.len() as u64;
    b.iter(|| {
        let v: serde_json::Value = serde_json::from_str(input).unwrap();

        match &v["web-app"]["servlet"][0]["servlet-name"] {
            serde_json::Value::String(name) => name.clone(),
            _ => panic!("expected a string"),
        }
    })
}

#[bench]
fn read_numbers(b: &mut test::Bencher) {
    let input = "[1, -2147483649, 9223372036854775808, 1.5, 0.1000000000000000000000000001, 1e400]";

    b.bytes = input.len() as u64;
    b.iter(|| wheel_json::read(input).unwrap())
}

#[bench]
fn unescape_string(b: &mut test::Bencher) {
    let input = r#""This string has a lot of content 壁\nThere are so \"many\" errors 😄 and escaped \\ chars in it.\n""#;

    b.bytes = input.len() as u64;
    b.iter(|| wheel_json::read(input).unwrap())
}

#[bench]
#[cfg(feature = "serde_json")]
fn convert_web_app_to_serde_json(b: &mut test::Bencher) {
    let input = include_str!("../cases/web_app.json");

    let doc = wheel_json::read(input).unwrap();

    b.bytes = input.len() as u64;
    b.iter(|| doc.to_value())
}
