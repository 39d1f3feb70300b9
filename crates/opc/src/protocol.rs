use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use std::io::{self, Cursor, Read};

use crate::types::*;

/// Convert a channel intensity to a wire byte.
///
/// Truncates toward zero and saturates to `0..=255`; NaN maps to 0.
pub fn saturate(value: f64) -> u8 {
    // `as` casts from float saturate at the integer bounds.
    value as u8
}

/// Write the 4-byte message header.
pub fn write_header(buf: &mut Vec<u8>, channel: u8, command: Command, len: u16) {
    buf.push(channel);
    buf.push(command as u8);
    buf.write_u16::<BigEndian>(len).unwrap();
}

/// Build a set-pixel-colors message.
///
/// Format: u8(channel) + u8(0x00) + u16 BE(byte_count) + (r, g, b) bytes per pixel.
/// Pixels beyond what fits in a single message are dropped.
pub fn build_set_pixels_message(channel: u8, pixels: &[[f64; 3]]) -> Vec<u8> {
    let max_pixels = MAX_DATA_LEN / BYTES_PER_PIXEL;
    let pixels = &pixels[..pixels.len().min(max_pixels)];
    let data_len = pixels.len() * BYTES_PER_PIXEL;

    let mut buf = Vec::with_capacity(HEADER_LEN + data_len);
    write_header(&mut buf, channel, Command::SetPixelColors, data_len as u16);
    for [r, g, b] in pixels {
        buf.push(saturate(*r));
        buf.push(saturate(*g));
        buf.push(saturate(*b));
    }
    buf
}

/// A parsed OPC message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub channel: u8,
    pub command: u8,
    pub data: Vec<u8>,
}

impl Message {
    /// Interpret the payload as RGB triples. Trailing partial pixels are ignored.
    pub fn pixels(&self) -> Vec<[u8; 3]> {
        self.data
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|c| [c[0], c[1], c[2]])
            .collect()
    }
}

/// Parse one complete message from the front of `data`.
pub fn parse_message(data: &[u8]) -> io::Result<Message> {
    let mut cursor = Cursor::new(data);
    let channel = cursor.read_u8()?;
    let command = cursor.read_u8()?;
    let len = cursor.read_u16::<BigEndian>()? as usize;
    let mut payload = vec![0u8; len];
    cursor.read_exact(&mut payload)?;
    Ok(Message {
        channel,
        command,
        data: payload,
    })
}

/// Total size of the message at the front of `buf`, if its header is complete.
pub fn frame_len(buf: &[u8]) -> Option<usize> {
    if buf.len() < HEADER_LEN {
        return None;
    }
    let len = u16::from_be_bytes([buf[2], buf[3]]) as usize;
    Some(HEADER_LEN + len)
}

/// Split as many complete messages as possible off the front of `buf`.
pub fn drain_messages(buf: &mut Vec<u8>) -> io::Result<Vec<Message>> {
    let mut out = Vec::new();
    while let Some(total) = frame_len(buf) {
        if buf.len() < total {
            break;
        }
        out.push(parse_message(&buf[..total])?);
        buf.drain(..total);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_layout() {
        let msg = build_set_pixels_message(3, &[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert_eq!(&msg[..4], &[3, 0x00, 0x00, 0x06]);
        assert_eq!(&msg[4..], &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn values_saturate_and_truncate() {
        let msg = build_set_pixels_message(0, &[[-12.0, 255.9, 300.0], [f64::NAN, 0.99, 128.5]]);
        assert_eq!(&msg[4..], &[0, 255, 255, 0, 0, 128]);
    }

    #[test]
    fn empty_frame_is_header_only() {
        let msg = build_set_pixels_message(1, &[]);
        assert_eq!(msg, vec![1, 0, 0, 0]);
    }

    #[test]
    fn parse_built_message() {
        let msg = build_set_pixels_message(7, &[[10.0, 20.0, 30.0]]);
        let parsed = parse_message(&msg).unwrap();
        assert_eq!(parsed.channel, 7);
        assert_eq!(
            Command::from_u8(parsed.command),
            Some(Command::SetPixelColors)
        );
        assert_eq!(parsed.pixels(), vec![[10, 20, 30]]);
    }

    #[test]
    fn parse_truncated_payload_fails() {
        let mut msg = build_set_pixels_message(0, &[[1.0, 1.0, 1.0]]);
        msg.pop();
        assert!(parse_message(&msg).is_err());
    }

    #[test]
    fn drain_keeps_partial_tail() {
        let mut buf = build_set_pixels_message(1, &[[1.0, 2.0, 3.0]]);
        buf.extend(build_set_pixels_message(2, &[[4.0, 5.0, 6.0]]));
        let partial = build_set_pixels_message(3, &[[7.0, 8.0, 9.0]]);
        buf.extend_from_slice(&partial[..5]);

        let messages = drain_messages(&mut buf).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].channel, 1);
        assert_eq!(messages[1].channel, 2);
        assert_eq!(buf, partial[..5].to_vec());
    }
}
