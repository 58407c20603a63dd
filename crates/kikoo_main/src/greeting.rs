use kikoo_domain::ConsoleWriter;

use crate::Error;

/// Prints `Hello, NAME!` when exactly one name is given.
///
/// Any other count is reported as [`Error::MissingName`]; printing that error
/// is left to the caller.
pub fn greet<W: ConsoleWriter + ?Sized>(writer: &W, names: &[String]) -> Result<(), Error> {
    let [name] = names else {
        tracing::debug!(given = names.len(), "Refusing to greet");
        return Err(Error::MissingName { given: names.len() });
    };

    writer.write_normal(&format!("Hello, {name}!"))?;
    Ok(())
}
