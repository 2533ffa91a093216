//! Basic usage example for parseint
//!
//! Run with: cargo run --example basic_usage

use parseint::*;

fn main() -> Result<()> {
    println!("parseint Basic Usage Example");
    println!("============================");

    // Example 1: Decimal parsers
    println!("\n1. Decimal:");
    {
        let small: u32 = base10::u32("4294967295")?;
        let wide: u64 = base10::u32(b"000042")?;
        let negative: i32 = base10::i32("-2147483648")?;
        let big = base10_64::u64("18446744073709551615")?;
        let signed = base10_64::i64("+9223372036854775807")?;

        println!("  u32 max:        {}", small);
        println!("  u32 into u64:   {}", wide);
        println!("  i32 min:        {}", negative);
        println!("  u64 max:        {}", big);
        println!("  i64 max:        {}", signed);
    }

    // Example 2: Hexadecimal parsers
    println!("\n2. Hexadecimal:");
    {
        let port: u16 = base16::u16("1F90")?;
        let color: u32 = base16::u32("00ff8800")?;
        let widened: u64 = base16::u32("deadbeef")?;

        println!("  u16:            {:#06x} ({})", port, port);
        println!("  u32:            {:#010x}", color);
        println!("  u32 into u64:   {:#x}", widened);
    }

    // Example 3: Error handling
    println!("\n3. Error Handling:");
    {
        let cases: [(&str, Result<i64>); 5] = [
            ("", base10_64::i64("")),
            ("-", base10_64::i64("-")),
            ("12x", base10_64::i64("12x")),
            ("9223372036854775808", base10_64::i64("9223372036854775808")),
            ("-9223372036854775808", base10_64::i64("-9223372036854775808")),
        ];

        for (input, result) in cases {
            match result {
                Ok(v) => println!("  {:<24} -> {}", format!("{input:?}"), v),
                Err(e) => println!("  {:<24} -> error: {}", format!("{input:?}"), e),
            }
        }

        // Hex never reports overflow, only syntax
        let too_wide = base16::u16::<u16>("10000");
        println!("  {:<24} -> {:?}", "\"10000\" (hex u16)", too_wide);
    }

    // Example 4: Zero on error
    println!("\n4. Zero On Error:");
    {
        let inputs = ["17", "seventeen", "99999999999", "-17"];
        for input in inputs {
            let value: u32 = base10::u32(input).unwrap_or_default();
            println!("  {:<24} -> {}", format!("{input:?}"), value);
        }
    }

    // Example 5: Text and bytes agree
    println!("\n5. Text And Bytes:");
    {
        let text = String::from("-123456789012");
        let bytes = text.clone().into_bytes();
        let from_text = base10_64::i64(&text)?;
        let from_bytes = base10_64::i64(&bytes)?;
        assert_eq!(from_text, from_bytes);
        println!("  text={} bytes={}", from_text, from_bytes);
    }

    println!("\nAll examples completed successfully!");
    Ok(())
}
