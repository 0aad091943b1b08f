//! printf-style rendering of a template and a list of boxed arguments.
//!
//! Placeholders are a `%` followed by one selector:
//!
//! | selector  | output                                   |
//! |-----------|------------------------------------------|
//! | `s`       | string (byte strings stop at a NUL)      |
//! | `c`       | single character                         |
//! | `d` `i`   | signed decimal                           |
//! | `l`       | wide signed decimal                      |
//! | `x` `X`   | hexadecimal, lower / upper case          |
//! | `b` `B`   | binary, bare / with a `0b` prefix        |
//! | `t` `T`   | boolean as `T`/`F` / `true`/`false`      |
//! | `%`       | a literal `%`, consumes no argument      |
//!
//! Any other selector, and a `%` ending the template, is copied as is.
//!
//! Arguments are trusted: a missing one renders nothing, extra ones are
//! ignored, and one of the wrong kind is rendered in its natural form.

use no_std_io::{Result, Write};

use crate::strings::until_nul;

/// One argument of a log call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arg<'a> {
    Str(&'a str),
    /// Byte string, read up to the first NUL.
    Bytes(&'a [u8]),
    Char(char),
    Bool(bool),
    Signed(i64),
    Unsigned(u64),
}

impl<'a> Arg<'a> {
    /// Two's complement bits of integer-like arguments.
    fn bits(&self) -> Option<u64> {
        match *self {
            Arg::Signed(v) => Some(v as u64),
            Arg::Unsigned(v) => Some(v),
            Arg::Char(c) => Some(c as u64),
            Arg::Bool(b) => Some(b as u64),
            Arg::Str(_) | Arg::Bytes(_) => None,
        }
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(s: &'a str) -> Self {
        Arg::Str(s)
    }
}

impl<'a> From<&'a [u8]> for Arg<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Arg::Bytes(bytes)
    }
}

impl<'a> From<char> for Arg<'a> {
    fn from(c: char) -> Self {
        Arg::Char(c)
    }
}

impl<'a> From<bool> for Arg<'a> {
    fn from(b: bool) -> Self {
        Arg::Bool(b)
    }
}

macro_rules! impl_from_integer {
    ($variant:ident as $wide:ty: $($t:ty),*) => {
        $(
            impl<'a> From<$t> for Arg<'a> {
                #[inline]
                fn from(v: $t) -> Self {
                    Arg::$variant(v as $wide)
                }
            }
        )*
    };
}

impl_from_integer!(Signed as i64: i8, i16, i32, i64, isize);
impl_from_integer!(Unsigned as u64: u8, u16, u32, u64, usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Placeholder {
    Str,
    Char,
    Decimal,
    LowerHex,
    UpperHex,
    Binary,
    PrefixedBinary,
    Flag,
    Bool,
    Percent,
}

impl Placeholder {
    fn from_selector(selector: u8) -> Option<Placeholder> {
        match selector {
            b's' => Some(Placeholder::Str),
            b'c' => Some(Placeholder::Char),
            b'd' | b'i' | b'l' => Some(Placeholder::Decimal),
            b'x' => Some(Placeholder::LowerHex),
            b'X' => Some(Placeholder::UpperHex),
            b'b' => Some(Placeholder::Binary),
            b'B' => Some(Placeholder::PrefixedBinary),
            b't' => Some(Placeholder::Flag),
            b'T' => Some(Placeholder::Bool),
            b'%' => Some(Placeholder::Percent),
            _ => None,
        }
    }
}

/// Render `format` with `args` into `sink`.
///
/// Each literal run and each substituted value is a single write. Stops at
/// the first write the sink refuses.
pub fn write_formatted<W>(sink: &mut W, format: &str, args: &[Arg]) -> Result<()>
where
    W: Write + ?Sized,
{
    let bytes = format.as_bytes();
    let mut args = args.iter();
    let mut run_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }

        let placeholder = match bytes.get(i + 1).and_then(|s| Placeholder::from_selector(*s)) {
            Some(placeholder) => placeholder,
            None => {
                // Unknown or missing selector: the `%` stays in the literal run
                i += 1;
                continue;
            }
        };

        write_run(sink, &format[run_start..i])?;

        if placeholder == Placeholder::Percent {
            // The second `%` opens the next literal run
            run_start = i + 1;
        } else {
            if let Some(arg) = args.next() {
                write_arg(sink, placeholder, arg)?;
            }
            run_start = i + 2;
        }

        i += 2;
    }

    write_run(sink, &format[run_start..])
}

fn write_run<W>(sink: &mut W, run: &str) -> Result<()>
where
    W: Write + ?Sized,
{
    if run.is_empty() {
        Ok(())
    } else {
        sink.write_str(run)
    }
}

fn write_arg<W>(sink: &mut W, placeholder: Placeholder, arg: &Arg) -> Result<()>
where
    W: Write + ?Sized,
{
    match (placeholder, arg.bits()) {
        (Placeholder::Char, Some(bits)) => match *arg {
            Arg::Char(c) => sink.write_char(c),
            Arg::Bool(_) => write_natural(sink, arg),
            _ if bits <= 0xff => sink.write_byte(bits as u8),
            _ => Ok(()),
        },
        (Placeholder::Decimal, Some(bits)) => match *arg {
            Arg::Signed(v) if v < 0 => write_number(sink, "-", (v as u64).wrapping_neg(), 10, false),
            _ => write_number(sink, "", bits, 10, false),
        },
        (Placeholder::LowerHex, Some(bits)) => write_number(sink, "", bits, 16, false),
        (Placeholder::UpperHex, Some(bits)) => write_number(sink, "", bits, 16, true),
        (Placeholder::Binary, Some(bits)) => write_number(sink, "", bits, 2, false),
        (Placeholder::PrefixedBinary, Some(bits)) => write_number(sink, "0b", bits, 2, false),
        (Placeholder::Flag, Some(bits)) => sink.write_byte(if bits != 0 { b'T' } else { b'F' }),
        (Placeholder::Bool, Some(bits)) => sink.write_str(if bits != 0 { "true" } else { "false" }),
        _ => write_natural(sink, arg),
    }
}

/// The argument as `%s` shows it.
fn write_natural<W>(sink: &mut W, arg: &Arg) -> Result<()>
where
    W: Write + ?Sized,
{
    match *arg {
        Arg::Str(s) => write_run(sink, s),
        Arg::Bytes(b) => {
            let b = until_nul(b);
            if b.is_empty() {
                Ok(())
            } else {
                sink.write_bytes(b)
            }
        }
        Arg::Char(c) => sink.write_char(c),
        Arg::Bool(b) => sink.write_str(if b { "true" } else { "false" }),
        Arg::Signed(v) if v < 0 => write_number(sink, "-", (v as u64).wrapping_neg(), 10, false),
        Arg::Signed(v) => write_number(sink, "", v as u64, 10, false),
        Arg::Unsigned(v) => write_number(sink, "", v, 10, false),
    }
}

// Prefix plus 64 binary digits
const NUMBER_BUFFER_SIZE: usize = 2 + 64;

fn write_number<W>(sink: &mut W, prefix: &str, mut value: u64, radix: u64, upper: bool) -> Result<()>
where
    W: Write + ?Sized,
{
    let digits: &[u8; 16] = if upper {
        b"0123456789ABCDEF"
    } else {
        b"0123456789abcdef"
    };

    let mut buffer = [0u8; NUMBER_BUFFER_SIZE];
    let mut start = buffer.len();

    loop {
        start -= 1;
        buffer[start] = digits[(value % radix) as usize];
        value /= radix;
        if value == 0 {
            break;
        }
    }

    for b in prefix.as_bytes().iter().rev() {
        start -= 1;
        buffer[start] = *b;
    }

    sink.write_bytes(&buffer[start..])
}

#[cfg(test)]
mod tests {

    use super::*;

    /// Keeps every write call as a separate chunk.
    #[derive(Default)]
    struct Recorder {
        chunks: Vec<Vec<u8>>,
    }

    impl Recorder {
        fn text(&self) -> String {
            String::from_utf8(self.chunks.concat()).unwrap()
        }
    }

    impl Write for Recorder {
        fn write_byte(&mut self, byte: u8) -> Result<()> {
            self.chunks.push(vec![byte]);
            Ok(())
        }

        fn write_bytes(&mut self, buf: &[u8]) -> Result<()> {
            self.chunks.push(buf.to_vec());
            Ok(())
        }
    }

    fn render(format: &str, args: &[Arg]) -> String {
        let mut recorder = Recorder::default();
        write_formatted(&mut recorder, format, args).unwrap();
        recorder.text()
    }

    #[test]
    fn test_decimal_and_string() {
        assert_eq!(
            "3 apples, none left",
            render("%d apples, %s left", &[3.into(), "none".into()])
        );
        assert_eq!("-42 / 7", render("%i / %l", &[(-42).into(), 7i64.into()]));
        assert_eq!(
            "-9223372036854775808",
            render("%l", &[i64::min_value().into()])
        );
        assert_eq!("0", render("%d", &[0u8.into()]));
    }

    #[test]
    fn test_hex_case() {
        assert_eq!("ff/FF", render("%x/%X", &[255.into(), 255.into()]));
        assert_eq!("0", render("%x", &[0u32.into()]));
        assert_eq!("deadbeef", render("%x", &[0xdead_beefu32.into()]));
        assert_eq!("ffffffffffffffff", render("%x", &[(-1).into()]));
    }

    #[test]
    fn test_binary() {
        assert_eq!("101", render("%b", &[5.into()]));
        assert_eq!("0b1010", render("%B", &[10u8.into()]));
        assert_eq!("0b0", render("%B", &[0.into()]));
    }

    #[test]
    fn test_booleans() {
        assert_eq!(
            "T F true false",
            render(
                "%t %t %T %T",
                &[true.into(), false.into(), true.into(), 0.into()]
            )
        );
    }

    #[test]
    fn test_chars() {
        assert_eq!("<é>", render("<%c>", &['é'.into()]));
        assert_eq!("A", render("%c", &[0x41u8.into()]));
        assert_eq!("", render("%c", &[(-1).into()]));
    }

    #[test]
    fn test_char_of_bool_renders_naturally() {
        assert_eq!("[true|false]", render("[%c|%c]", &[true.into(), false.into()]));
    }

    #[test]
    fn test_byte_strings_stop_at_nul() {
        let raw: &[u8] = b"serial\0garbage";
        assert_eq!("port serial", render("port %s", &[raw.into()]));
    }

    #[test]
    fn test_literal_percent() {
        assert_eq!("100% done", render("100%% done", &[]));
        assert_eq!("%7", render("%%%d", &[7.into()]));
    }

    #[test]
    fn test_unknown_selector_passes_through() {
        assert_eq!("%q and %ü", render("%q and %ü", &[1.into()]));
        assert_eq!("50%", render("50%", &[]));
        assert_eq!("%", render("%", &[]));
    }

    #[test]
    fn test_missing_and_extra_arguments() {
        assert_eq!("a= b=", render("a=%d b=%s", &[]));
        assert_eq!("only 1", render("only %d", &[1.into(), 2.into()]));
    }

    #[test]
    fn test_mismatched_arguments_render_naturally() {
        assert_eq!("x", render("%d", &["x".into()]));
        assert_eq!("12 true", render("%s %s", &[12u16.into(), true.into()]));
        assert_eq!("65", render("%d", &['A'.into()]));
    }

    #[test]
    fn test_one_write_per_run_and_value() {
        let mut recorder = Recorder::default();
        write_formatted(&mut recorder, "a%db%%c%s", &[10.into(), "zz".into()]).unwrap();

        let chunks: Vec<&[u8]> = recorder.chunks.iter().map(|c| &c[..]).collect();
        assert_eq!(
            vec![&b"a"[..], &b"10"[..], &b"b"[..], &b"%c"[..], &b"zz"[..]],
            chunks
        );
    }

    #[test]
    fn test_stops_on_sink_error() {
        struct Refusing;

        impl Write for Refusing {
            fn write_byte(&mut self, _byte: u8) -> Result<()> {
                Err(())
            }
        }

        assert!(write_formatted(&mut Refusing, "%d", &[1.into()]).is_err());
        assert!(write_formatted(&mut Refusing, "", &[]).is_ok());
    }
}
