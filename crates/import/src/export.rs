use saldo_core::{Column, TransactionRecord};
use std::io::Write;

use crate::error::ExportError;

/// Records as a pretty-printed JSON array, keyed by the statement's column names.
pub fn write_json<W: Write>(mut writer: W, records: &[TransactionRecord]) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Records as CSV with a header row of column names. Amounts use a decimal point.
pub fn write_csv<W: Write>(writer: W, records: &[TransactionRecord]) -> Result<(), ExportError> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(Column::ALL.iter().map(|c| c.label()))?;
    for record in records {
        out.write_record(Column::ALL.iter().map(|&c| record.field(c).into_owned()))?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use saldo_core::Amount;

    fn records() -> Vec<TransactionRecord> {
        vec![
            TransactionRecord {
                date: "03/01/23".into(),
                description: "IVA - Alicuota General".into(),
                reference: "0012745".into(),
                debit: Amount::from_localized("1.042,23"),
                ..Default::default()
            },
            TransactionRecord::balance_line("31/01/23", "Saldo", Amount::from_localized("2.239.979,46")),
        ]
    }

    #[test]
    fn csv_has_header_and_rows() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &records()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Fecha,Conceptos,Referencias,Débitos,Créditos,Saldo");
        assert_eq!(lines[1], "03/01/23,IVA - Alicuota General,0012745,1042.23,,");
        assert_eq!(lines[2], "31/01/23,Saldo,,,,2239979.46");
    }

    #[test]
    fn json_is_an_array_of_objects() {
        let mut buf = Vec::new();
        write_json(&mut buf, &records()).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let arr = v.as_array().unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[1]["Conceptos"], "Saldo");
        assert_eq!(arr[1]["Saldo"], serde_json::json!(2239979.46));
    }
}
