// src/coords.rs - Raw column <-> render column translation

/// Width of a tab stop in rendered columns
pub const TAB_STOP: usize = 4;

/// Expand every tab in `raw` to spaces up to the next tab stop.
///
/// All other bytes pass through unchanged, so a row without tabs renders
/// as itself.
pub fn expand_tabs(raw: &[u8]) -> Vec<u8> {
    let tabs = raw.iter().filter(|&&b| b == b'\t').count();
    let mut render = Vec::with_capacity(raw.len() + tabs * (TAB_STOP - 1));

    for &byte in raw {
        if byte == b'\t' {
            render.push(b' ');
            while render.len() % TAB_STOP != 0 {
                render.push(b' ');
            }
        } else {
            render.push(byte);
        }
    }

    render
}

/// Convert a raw column into the column it occupies on screen.
///
/// `cx` past the end of the row is clamped to the row length.
pub fn cx_to_rx(raw: &[u8], cx: usize) -> usize {
    raw.iter().take(cx).fold(0, |rx, &byte| {
        if byte == b'\t' {
            rx + TAB_STOP - (rx % TAB_STOP)
        } else {
            rx + 1
        }
    })
}

/// Convert a rendered column back into a raw column.
///
/// Returns the index of the byte whose rendered span covers `rx`, or the
/// row length when `rx` lies past the rendered end.
pub fn rx_to_cx(raw: &[u8], rx: usize) -> usize {
    let mut cur_rx = 0;
    for (cx, &byte) in raw.iter().enumerate() {
        if byte == b'\t' {
            cur_rx += TAB_STOP - (cur_rx % TAB_STOP);
        } else {
            cur_rx += 1;
        }
        if cur_rx > rx {
            return cx;
        }
    }
    raw.len()
}
