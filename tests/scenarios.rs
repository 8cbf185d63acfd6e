//! End-to-end behaviour of the encoding engine through the public API.

use std::thread;

use barcode_bits::{
    Code128Set, EncodeOptions, ErrorKind, FNC1_CHAR, Symbology, encode, encode_result,
    encoder_for,
};
use pretty_assertions::assert_eq;

fn opts() -> EncodeOptions {
    EncodeOptions::default()
}

#[test]
fn codabar_frames_start_and_stop_with_gaps() {
    let enc = encode(Symbology::Codabar, "A1234B", &opts()).unwrap();
    assert!(enc.bits.starts_with("1011001001"));
    assert!(enc.bits.ends_with("1010010011"));
    // six symbols, five single-module gaps
    let symbols = ["1011001001", "101011001", "101001011", "110010101", "101101001", "1010010011"];
    assert_eq!(enc.bits, symbols.join("0"));
    assert_eq!(enc.raw_data, "A1234B");
    assert_eq!(enc.canonical_data, "1234");
}

#[test]
fn standard_2of5_mod10_appends_weighted_check() {
    // weights 3,1,3,1 from the right: 4*3 + 3*1 + 2*3 + 1*1 = 22 -> (10 - 2) % 10 = 8
    let enc = encode(Symbology::Standard2of5Mod10, "1234", &opts()).unwrap();
    assert_eq!(enc.canonical_data, "12348");
    assert_eq!(enc.metadata.check.as_deref(), Some("8"));
    assert!(enc.bits.starts_with("11011010"));
    assert!(enc.bits.ends_with("1101011"));
    assert_eq!(enc.bits.len(), 8 + 5 * 14 + 7);
}

#[test]
fn code128_odd_digit_run_uses_code_c() {
    let enc = encode(Symbology::Code128, "1234567", &opts()).unwrap();
    assert_eq!(enc.canonical_data, "01234567");
    assert_eq!(enc.metadata.mode.as_deref(), Some("C"));
    // START_C, 01, 23, 45, 67, check, STOP (11 modules each) + 2 termination modules
    assert_eq!(enc.bits.len(), 7 * 11 + 2);
    assert!(enc.bits.starts_with("11010011100"));
    assert!(enc.bits.ends_with("1100011101011"));
    // 105 + 1 + 23*2 + 45*3 + 67*4 = 555 -> 555 % 103 = 40
    assert_eq!(enc.metadata.check.as_deref(), Some("40"));
}

#[test]
fn pharmacode_range_and_smallest_value() {
    let err = encode(Symbology::Pharmacode, "2", &opts()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Structural);
    // 3 decomposes into two thin bars
    let enc = encode(Symbology::Pharmacode, "3", &opts()).unwrap();
    assert_eq!(enc.bits, "1001");
    let enc = encode(Symbology::Pharmacode, "131070", &opts()).unwrap();
    assert!(enc.bits.chars().all(|c| c == '0' || c == '1'));
    assert!(encode(Symbology::Pharmacode, "131071", &opts()).is_err());
    assert!(encode(Symbology::Pharmacode, "1234567", &opts()).is_err());
}

#[test]
fn msi_mod11_mod10_chains_check_digits() {
    let enc = encode(Symbology::MsiMod11Mod10, "1234", &opts()).unwrap();
    // mod 11 of 1234 is 3; mod 10 of 12343 is 0
    assert_eq!(enc.canonical_data, "123430");
    assert!(enc.bits.starts_with("110"));
    assert!(enc.bits.ends_with("1001"));
    assert_eq!(enc.bits.len(), 3 + 6 * 12 + 4);
}

#[test]
fn encoding_is_deterministic() {
    let cases = [
        (Symbology::Code128, "Part-0042/x"),
        (Symbology::Telepen, "AB123456"),
        (Symbology::Code93, "TEST93"),
        (Symbology::Ean13, "400638133393"),
        (Symbology::Code39Extended, "Hello, World"),
    ];
    for (sym, data) in cases {
        let a = encode(sym, data, &opts()).unwrap();
        let b = encode(sym, data, &opts()).unwrap();
        assert_eq!(a, b, "{sym}");
    }
}

#[test]
fn blank_input_is_rejected_for_every_symbology() {
    for entry in Symbology::catalog() {
        for blank in ["", "   ", "\t\n"] {
            let result = encode_result(entry.symbology, blank, &opts());
            assert!(!result.is_ok(), "{} accepted blank input", entry.name);
            assert!(result.bits.is_empty());
            assert_eq!(result.errors[0].kind, ErrorKind::Configuration);
        }
    }
}

#[test]
fn every_symbology_encodes_a_sample_to_binary_modules() {
    let sample = |sym: Symbology| -> &'static str {
        use Symbology::*;
        match sym {
            UpcA | Ucc12 => "03600029145",
            UpcE => "04252614",
            UpcSupplemental2 => "12",
            UpcSupplemental5 => "52495",
            Ean13 | Ucc13 => "400638133393",
            Ean8 => "9638507",
            Interleaved2of5 => "1234",
            Interleaved2of5Mod10 => "123",
            Jan13 => "490123456789",
            Bookland | Isbn => "978030640615",
            Codabar => "A40156B",
            Postnet => "12345",
            Code11 | Usd8 => "123-45",
            Code128C | Itf14 => "1540014128876",
            Fim => "C",
            Pharmacode => "1234",
            Code39Extended | Code128 | Code128B | Code93 | Telepen => "Parts #42",
            Code128A => "PARTS #42",
            _ => "1234",
        }
    };
    for entry in Symbology::catalog() {
        let data = sample(entry.symbology);
        let enc = encode(entry.symbology, data, &opts())
            .unwrap_or_else(|err| panic!("{} rejected {data:?}: {err}", entry.name));
        assert!(!enc.bits.is_empty(), "{}", entry.name);
        assert!(
            enc.bits.chars().all(|c| c == '0' || c == '1'),
            "{} produced a non-binary pattern",
            entry.name
        );
        assert_eq!(enc.module_count(), enc.bits.len());
    }
}

#[test]
fn length_constrained_symbologies_reject_wrong_lengths() {
    let cases = [
        (Symbology::UpcSupplemental2, "1"),
        (Symbology::UpcSupplemental2, "123"),
        (Symbology::UpcSupplemental5, "1234"),
        (Symbology::UpcSupplemental5, "123456"),
        (Symbology::UpcA, "123"),
        (Symbology::Ean8, "123456789"),
        (Symbology::Itf14, "123"),
        (Symbology::Postnet, "1234567"),
        (Symbology::Interleaved2of5, "123"),
    ];
    for (sym, data) in cases {
        let err = encode(sym, data, &opts()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Structural, "{sym} {data}");
    }
}

#[test]
fn charset_errors_name_the_extended_variant() {
    let err = encode(Symbology::Code39, "lower", &opts()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Charset);
    assert!(err.to_string().contains("Extended Code39"));
    assert!(encode(Symbology::Code39Extended, "lower", &opts()).is_ok());
}

#[test]
fn codabar_error_text_is_code_and_message() {
    let result = encode_result(Symbology::Codabar, "1234B", &opts());
    assert_eq!(
        result.errors[0].text(),
        "ECODABAR-2: Data format invalid. (Invalid START character)"
    );
}

#[test]
fn check_digits_round_trip_from_canonical_data() {
    // Strip the appended check digits from the canonical data, encode the rest again,
    // and expect the same check.
    let cases = [
        (Symbology::Standard2of5Mod10, "987654", 1),
        (Symbology::Interleaved2of5Mod10, "98765", 1),
        (Symbology::MsiMod10, "80523", 1),
        (Symbology::MsiMod11, "80523", 1),
        (Symbology::Msi2Mod10, "80523", 2),
        (Symbology::MsiMod11Mod10, "80523", 2),
        (Symbology::Code39Mod43, "CODE 39", 1),
    ];
    for (sym, data, check_len) in cases {
        let first = encode(sym, data, &opts()).unwrap();
        let body = &first.canonical_data[..first.canonical_data.len() - check_len];
        assert_eq!(body, data);
        let again = encode(sym, body, &opts()).unwrap();
        assert_eq!(again.metadata.check, first.metadata.check, "{sym}");
        assert_eq!(again.bits, first.bits);
    }
}

#[test]
fn encoders_used_directly_reject_empty_data() {
    for entry in Symbology::catalog() {
        let encoder = encoder_for(entry.symbology, &opts()).unwrap();
        let err = encoder.encode("").unwrap_err();
        assert_ne!(err.kind(), ErrorKind::Configuration, "{}", entry.name);
    }
}

#[test]
fn code39_keeps_inner_stars_as_data() {
    let ext = encode(Symbology::Code39Extended, "A*B", &opts()).unwrap();
    assert_eq!(ext.canonical_data, "A*B");
    assert_ne!(ext.bits, encode(Symbology::Code39Extended, "AB", &opts()).unwrap().bits);

    assert_eq!(
        encode(Symbology::Code39, "A*B", &opts()).unwrap_err().code(),
        "EC39-1"
    );
    assert_eq!(encode(Symbology::Code39, "**", &opts()).unwrap_err().code(), "EC39-3");
    let framed = encode(Symbology::Code39, "*AB*", &opts()).unwrap();
    assert_eq!(framed.canonical_data, "AB");
}

#[test]
fn gtin_check_digits_are_recomputed() {
    let wrong = encode(Symbology::Ean13, "4006381333930", &opts()).unwrap();
    let right = encode(Symbology::Ean13, "4006381333931", &opts()).unwrap();
    assert_eq!(wrong.bits, right.bits);
    assert_eq!(wrong.canonical_data, "4006381333931");
    assert_eq!(right.metadata.country.as_deref(), Some("GERMANY"));
}

#[test]
fn code128_forced_sets() {
    let forced = EncodeOptions::default().with_code128_set(Code128Set::A);
    assert!(encode(Symbology::Code128, "lower", &forced).is_err());
    assert!(encode(Symbology::Code128A, "lower", &opts()).is_err());
    assert!(encode(Symbology::Code128C, "12AB", &opts()).is_err());

    let gs1 = format!("{FNC1_CHAR}0109501101530003");
    let enc = encode(Symbology::Code128, &gs1, &opts()).unwrap();
    assert_eq!(enc.metadata.mode.as_deref(), Some("C"));
}

#[test]
fn telepen_modes_are_reported() {
    let mode = |data: &str| {
        encode(Symbology::Telepen, data, &opts())
            .unwrap()
            .metadata
            .mode
            .unwrap()
    };
    assert_eq!(mode("Hello"), "ascii");
    assert_eq!(mode("123456"), "numeric");
    assert_eq!(mode("123456AB"), "numeric-ascii");
    assert_eq!(mode("AB123456"), "ascii-numeric");
    assert!(encode(Symbology::Telepen, "£1", &opts()).is_err());
}

#[test]
fn concurrent_encodes_do_not_interfere() {
    let expected: Vec<_> = (0..8)
        .map(|i| encode(Symbology::Code128, &format!("LOT{i:04}x{i}"), &opts()).unwrap())
        .collect();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                (0..200)
                    .map(|_| {
                        encode(Symbology::Code128, &format!("LOT{i:04}x{i}"), &opts())
                            .unwrap()
                            .bits
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        for bits in handle.join().unwrap() {
            assert_eq!(bits, expected[i].bits);
        }
    }
}

#[test]
fn result_record_serialises_either_bits_or_errors() {
    let ok = encode_result(Symbology::Ean8, "9638507", &opts());
    let json = serde_json::to_value(&ok).unwrap();
    assert_eq!(json["symbology"], "ean-8");
    assert_eq!(json["canonical_data"], "96385074");
    assert_eq!(json["errors"].as_array().map(Vec::len), Some(0));

    let failed = encode_result(Symbology::Ean8, "96385", &opts());
    let json = serde_json::to_value(&failed).unwrap();
    assert_eq!(json["bits"], "");
    assert_eq!(json["errors"][0]["code"], "EEAN8-1");
    assert!(json.get("canonical_data").is_none());
}
