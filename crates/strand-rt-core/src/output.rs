use std::io;

/// Byte sink the output routines render into.
///
/// The embedding host supplies the real sink (stdout, a front panel, a
/// capture buffer); the formatting functions below never buffer across
/// calls, so each call hands the sink one complete rendered value.
pub trait OutputSink {
    fn output_string(&mut self, bytes: &[u8]);
}

impl OutputSink for Vec<u8> {
    fn output_string(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }
}

/// Adapter from any [`io::Write`] to an [`OutputSink`].
///
/// The sink contract is fire-and-forget, so write errors are dropped.
pub struct WriteSink<W>(pub W);

impl<W: io::Write> OutputSink for WriteSink<W> {
    fn output_string(&mut self, bytes: &[u8]) {
        let _ = self.0.write_all(bytes);
    }
}

pub fn output_bool(sink: &mut impl OutputSink, value: bool) {
    sink.output_string(if value { b"true" } else { b"false" });
}

pub fn output_i64(sink: &mut impl OutputSink, value: i64) {
    let mut buf = itoa::Buffer::new();
    sink.output_string(buf.format(value).as_bytes());
}

pub fn output_u64(sink: &mut impl OutputSink, value: u64) {
    let mut buf = itoa::Buffer::new();
    sink.output_string(buf.format(value).as_bytes());
}

pub fn output_i8(sink: &mut impl OutputSink, value: i8) {
    output_i64(sink, i64::from(value));
}

pub fn output_u8(sink: &mut impl OutputSink, value: u8) {
    output_u64(sink, u64::from(value));
}

pub fn output_i16(sink: &mut impl OutputSink, value: i16) {
    output_i64(sink, i64::from(value));
}

pub fn output_u16(sink: &mut impl OutputSink, value: u16) {
    output_u64(sink, u64::from(value));
}

pub fn output_i32(sink: &mut impl OutputSink, value: i32) {
    output_i64(sink, i64::from(value));
}

pub fn output_u32(sink: &mut impl OutputSink, value: u32) {
    output_u64(sink, u64::from(value));
}

/// Emits string data as-is. Compiled code outputs string constants and
/// slices through this rather than calling the sink directly.
pub fn output_str(sink: &mut impl OutputSink, bytes: &[u8]) {
    sink.output_string(bytes);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(f: impl FnOnce(&mut Vec<u8>)) -> Vec<u8> {
        let mut out = Vec::new();
        f(&mut out);
        out
    }

    #[test]
    fn bool_renders_literal_words() {
        assert_eq!(rendered(|out| output_bool(out, true)), b"true");
        assert_eq!(rendered(|out| output_bool(out, false)), b"false");
    }

    #[test]
    fn zero_renders_as_single_digit() {
        assert_eq!(rendered(|out| output_u64(out, 0)), b"0");
        assert_eq!(rendered(|out| output_i64(out, 0)), b"0");
    }

    #[test]
    fn negative_values_carry_minus_prefix() {
        assert_eq!(rendered(|out| output_i64(out, -42)), b"-42");
        assert_eq!(rendered(|out| output_i8(out, -128)), b"-128");
    }

    #[test]
    fn extreme_values_of_each_width() {
        assert_eq!(
            rendered(|out| output_i64(out, i64::MIN)),
            b"-9223372036854775808"
        );
        assert_eq!(
            rendered(|out| output_i64(out, i64::MAX)),
            b"9223372036854775807"
        );
        assert_eq!(
            rendered(|out| output_u64(out, u64::MAX)),
            b"18446744073709551615"
        );
        assert_eq!(rendered(|out| output_i8(out, i8::MAX)), b"127");
        assert_eq!(rendered(|out| output_u8(out, u8::MAX)), b"255");
        assert_eq!(rendered(|out| output_i16(out, i16::MIN)), b"-32768");
        assert_eq!(rendered(|out| output_u16(out, u16::MAX)), b"65535");
        assert_eq!(rendered(|out| output_i32(out, i32::MIN)), b"-2147483648");
        assert_eq!(rendered(|out| output_u32(out, u32::MAX)), b"4294967295");
    }

    #[test]
    fn consecutive_values_concatenate_in_call_order() {
        let mut out = Vec::new();
        output_i32(&mut out, 1);
        output_str(&mut out, b" ");
        output_i32(&mut out, -2);
        assert_eq!(out, b"1 -2");
    }

    #[test]
    fn write_sink_forwards_bytes() {
        let mut sink = WriteSink(Vec::new());
        output_u64(&mut sink, 7);
        output_str(&mut sink, b"!");
        assert_eq!(sink.0, b"7!");
    }
}
