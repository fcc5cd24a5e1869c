use base64::{engine::general_purpose::STANDARD, Engine as _};

// Cursors stay valid as long as rows are only ever appended
const CURSOR_PREFIX: &str = "arrayconnection:";

pub fn encode_cursor(offset: i64) -> String{
    STANDARD.encode(format!("{}{}", CURSOR_PREFIX, offset))
}

// Offsets are bounded by i32::MAX, the largest row count the api can report
pub fn decode_cursor(cursor: &str) -> Result<i64, String>{
    let invalid = || format!("{} is not a valid cursor", cursor);

    let bytes = STANDARD.decode(cursor).map_err(|_| invalid())?;
    let decoded = String::from_utf8(bytes).map_err(|_| invalid())?;

    decoded
        .strip_prefix(CURSOR_PREFIX)
        .and_then(|offset| offset.parse::<i64>().ok())
        .filter(|offset| (0..=i64::from(i32::MAX)).contains(offset))
        .ok_or_else(invalid)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest{
    pub first: Option<i64>,
    pub after: Option<i64>,
    pub last: Option<i64>,
    pub before: Option<i64>
}

impl PageRequest{
    pub fn parse(
        first: Option<i32>,
        after: Option<String>,
        last: Option<i32>,
        before: Option<String>
    ) -> Result<PageRequest, String>{
        if first.is_some_and(|first| first < 0){
            return Err("first must not be negative".to_string())
        }
        if last.is_some_and(|last| last < 0){
            return Err("last must not be negative".to_string())
        }

        Ok(PageRequest{
            first: first.map(i64::from),
            after: after.as_deref().map(decode_cursor).transpose()?,
            last: last.map(i64::from),
            before: before.as_deref().map(decode_cursor).transpose()?
        })
    }

    // Slice of [0, total) selected by the arguments
    pub fn window(&self, total: i64) -> PageWindow{
        let lower_bound = self.after.map_or(0, |after| after.saturating_add(1));
        let upper_bound = self.before.unwrap_or(total);

        let mut start = lower_bound;
        let mut end = upper_bound.min(total);

        if let Some(first) = self.first{
            end = end.min(start.saturating_add(first));
        }
        if let Some(last) = self.last{
            start = start.max(end.saturating_sub(last));
        }
        let end = end.max(start);

        PageWindow{
            start,
            end,
            has_previous_page: self.last.is_some() && start > lower_bound,
            has_next_page: self.first.is_some() && end < upper_bound
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow{
    pub start: i64,
    pub end: i64,
    pub has_previous_page: bool,
    pub has_next_page: bool
}

impl PageWindow{
    pub fn limit(&self) -> i64{
        self.end - self.start
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T>{
    pub items: Vec<T>,
    pub window: PageWindow,
    pub total: i64
}

impl<T> Page<T>{
    pub fn new(items: Vec<T>, window: PageWindow, total: i64) -> Self{
        Page{ items, window, total }
    }

    pub fn into_edges(self) -> impl Iterator<Item = (String, T)>{
        let start = self.window.start;
        self.items
            .into_iter()
            .enumerate()
            .map(move |(index, item)| (encode_cursor(start + index as i64), item))
    }
}
