extern crate fixed_bech32;

use fixed_bech32::{codec, segwit, Address};

fn do_test(data: &[u8]) {
    let s = match std::str::from_utf8(data) {
        Ok(s) => s,
        Err(_) => return,
    };

    if let Ok((hrp, values)) = codec::decode(s) {
        let reser = codec::encode(&hrp, &values).unwrap();
        assert_eq!(s.to_ascii_lowercase(), reser);
    }

    if let Ok(addr) = s.parse::<Address>() {
        assert_eq!(s.to_ascii_lowercase(), addr.to_string());
        let program = segwit::decode(addr.hrp(), s).unwrap();
        assert_eq!(&program, addr.witness_program());
    }

    if data.len() == 42 {
        let mut address = [0; 42];
        address.copy_from_slice(data);
        let dec = segwit::decode_fixed::<2, 42, 20>(b"bc", &address);
        if dec.valid_input {
            let enc = segwit::encode_fixed::<2, 20, 42>(b"bc", dec.witver, &dec.witprog);
            assert!(enc.success);
            assert_eq!(&enc.out[..], &data.to_ascii_lowercase()[..]);
        }
    }
}

#[cfg(feature = "afl")]
extern crate afl;
#[cfg(feature = "afl")]
fn main() {
    afl::read_stdio_bytes(|data| {
        do_test(&data);
    });
}

#[cfg(feature = "honggfuzz")]
#[macro_use] extern crate honggfuzz;
#[cfg(feature = "honggfuzz")]
fn main() {
    loop {
        fuzz!(|data| {
            do_test(data);
        });
    }
}
