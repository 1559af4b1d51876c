use std::borrow::Cow;

use tracing::trace;

use crate::context::ValueLookup;
use crate::error::Error;
use crate::scanner::{Scanner, Token};

/// Replace every placeholder in `template` with its value from `values`.
///
/// Returns `Cow::Borrowed` when the template has no placeholders. Bytes outside
/// placeholders are copied unchanged whatever their encoding. Substituted values are
/// never scanned again, so a value containing `${...}` is emitted verbatim. The first
/// placeholder without a value aborts rendering with [`Error::MissingKey`].
pub fn render<'b, T>(template: &'b T, values: &dyn ValueLookup) -> Result<Cow<'b, [u8]>, Error>
where
    T: AsRef<[u8]> + ?Sized,
{
    let template = template.as_ref();
    let mut result: Option<Vec<u8>> = None;

    for (token, range) in Scanner::new(template) {
        match token {
            Token::Literal(bytes) => {
                if let Some(res) = &mut result {
                    res.extend_from_slice(bytes);
                }
            }
            Token::Placeholder { name } => {
                let value = values
                    .lookup(name)
                    .ok_or_else(|| Error::MissingKey(name.to_string()))?;
                trace!(name = %name, start = range.start, "substituting placeholder");

                let res = result.get_or_insert_with(|| {
                    let mut buf = Vec::with_capacity(template.len() + 32);
                    buf.extend_from_slice(&template[..range.start]);
                    buf
                });
                res.extend_from_slice(value);
            }
        }
    }

    Ok(match result {
        Some(res) => Cow::Owned(res),
        None => Cow::Borrowed(template),
    })
}
