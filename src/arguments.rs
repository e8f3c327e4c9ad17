use std::net::SocketAddr;

use clap::Parser;

/// Command Line Arguments.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Arguments {
    /// Remote host to connect to.
    #[clap(value_parser)]
    pub hostname: String,

    /// Remote TCP port. Unparsable input is read as port 0.
    #[clap(value_parser = lenient_port, allow_hyphen_values = true)]
    pub port: u16,

    /// Address to publish console events on.
    #[clap(short, long, value_parser)]
    pub console: Option<SocketAddr>,
}

/// Read a port number the way `atoi` reads an integer: skip leading whitespace,
/// accept an optional sign, then take as many decimal digits as are present.
/// Never fails; the result is truncated to 16 bits.
pub fn lenient_port(s: &str) -> Result<u16, String> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i32, |acc, digit| {
            acc.wrapping_mul(10).wrapping_add(i32::from(digit - b'0'))
        });
    let value = if negative { value.wrapping_neg() } else { value };
    Ok(value as u16)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_plain_port() {
        assert_eq!(lenient_port("8080"), Ok(8080));
    }

    #[test]
    fn garbage_is_port_zero() {
        assert_eq!(lenient_port("http"), Ok(0));
        assert_eq!(lenient_port(""), Ok(0));
    }

    #[test]
    fn stops_at_first_non_digit() {
        assert_eq!(lenient_port("  42abc"), Ok(42));
        assert_eq!(lenient_port("+7"), Ok(7));
    }

    #[test]
    fn truncates_to_sixteen_bits() {
        assert_eq!(lenient_port("65537"), Ok(1));
        assert_eq!(lenient_port("-1"), Ok(u16::MAX));
    }

    #[test]
    fn positional_arguments() {
        let args = Arguments::try_parse_from(["linecat", "localhost", "7000"]).unwrap();
        assert_eq!(args.hostname, "localhost");
        assert_eq!(args.port, 7000);
        assert!(args.console.is_none());
    }

    #[test]
    fn negative_port_wraps_around() {
        let args = Arguments::try_parse_from(["linecat", "localhost", "-1"]).unwrap();
        assert_eq!(args.port, u16::MAX);
    }

    #[test]
    fn hyphenated_garbage_is_port_zero() {
        let args = Arguments::try_parse_from(["linecat", "localhost", "-abc"]).unwrap();
        assert_eq!(args.port, 0);
    }

    #[test]
    fn console_flag_still_parsed_after_port() {
        let args =
            Arguments::try_parse_from(["linecat", "localhost", "-7", "--console", "127.0.0.1:6669"])
                .unwrap();
        assert_eq!(args.port, 0u16.wrapping_sub(7));
        assert_eq!(args.console, Some("127.0.0.1:6669".parse().unwrap()));
    }

    #[test]
    fn wrong_argument_count_is_rejected() {
        assert!(Arguments::try_parse_from(["linecat", "localhost"]).is_err());
        assert!(Arguments::try_parse_from(["linecat", "a", "1", "extra"]).is_err());
    }
}
