use crate::util::{
    decode_enum, decode_json, encode_json, id_column, internal, to_rfc3339, utc_column,
};
use cal_core::error::CalendarError;
use cal_core::history::HistoryRepository;
use cal_core::types::{
    EntitySnapshot, HistoryAction, HistoryEntry, HistoryFilter, HistoryId, NewHistoryEntry,
    UserId,
};
use rusqlite::types::{Type, Value};
use rusqlite::Connection;

const COLUMNS: &str = "id, at, action, snapshot_json, actor_id, correlation_id";

pub struct HistoryRepo<'a> {
    pub conn: &'a Connection,
}

impl<'a> HistoryRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl HistoryRepository for HistoryRepo<'_> {
    fn append(&self, entry: NewHistoryEntry) -> Result<HistoryEntry, CalendarError> {
        let at = chrono::Utc::now();
        let snapshot_json = encode_json(&entry.snapshot).map_err(internal)?;
        let sql = "INSERT INTO history (at, action, entity_kind, entity_id, snapshot_json, actor_id, correlation_id) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
        self.conn
            .execute(
                sql,
                (
                    to_rfc3339(&at),
                    entry.action.as_str(),
                    entry.snapshot.kind().as_str(),
                    entry.snapshot.entity_id(),
                    snapshot_json,
                    entry.actor.map(UserId::get),
                    entry.correlation_id.as_deref(),
                ),
            )
            .map_err(internal)?;
        Ok(HistoryEntry {
            id: HistoryId::new(self.conn.last_insert_rowid()).map_err(internal)?,
            at,
            action: entry.action,
            snapshot: entry.snapshot,
            actor: entry.actor,
            correlation_id: entry.correlation_id,
        })
    }

    fn list(&self, filter: &HistoryFilter) -> Result<Vec<HistoryEntry>, CalendarError> {
        let mut sql = format!("SELECT {COLUMNS} FROM history");
        let mut clauses = Vec::new();
        let mut params: Vec<Value> = Vec::new();
        if let Some(kind) = filter.kind {
            params.push(Value::Text(kind.as_str().to_string()));
            clauses.push(format!("entity_kind = ?{}", params.len()));
        }
        if let Some(entity_id) = filter.entity_id {
            params.push(Value::Integer(entity_id));
            clauses.push(format!("entity_id = ?{}", params.len()));
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY id DESC");
        if let Some(limit) = filter.limit {
            params.push(Value::Integer(i64::from(limit)));
            sql.push_str(&format!(" LIMIT ?{}", params.len()));
        }

        let mut stmt = self.conn.prepare(&sql).map_err(internal)?;
        let rows = stmt
            .query_map(rusqlite::params_from_iter(params), map_history_row)
            .map_err(internal)?;
        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(internal)
    }
}

fn map_history_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<HistoryEntry> {
    let action: String = row.get(2)?;
    let action: HistoryAction = decode_enum(&action)
        .map_err(|err| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(err)))?;
    let snapshot_json: String = row.get(3)?;
    let snapshot: EntitySnapshot = decode_json(&snapshot_json)
        .map_err(|err| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(err)))?;
    let actor = match row.get::<_, Option<i64>>(4)? {
        Some(_) => Some(id_column(row, 4, UserId::new)?),
        None => None,
    };
    Ok(HistoryEntry {
        id: id_column(row, 0, HistoryId::new)?,
        at: utc_column(row, 1)?,
        action,
        snapshot,
        actor,
        correlation_id: row.get(5)?,
    })
}
