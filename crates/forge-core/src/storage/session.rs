use std::fs;
use std::path::Path;
use std::thread;

use tracing::{debug, info, warn};

use super::{ImportSummary, TranslationMemory, memory_file_name, modded_file_name};
use crate::buffer::ByteBuffer;
use crate::carve::{
    self, CarvedRecord, Confirmation, Extraction, OversizeWarning, ReplaceOutcome,
    ReplaceProposal,
};
use crate::error::Result;
use crate::text::{
    self, Charset, PendingTranslations, RepackReport, StringRecord, StringScanner, TextOptions,
};

/// Asks the operator whether an oversize replacement may go ahead
pub trait ConfirmPrompt {
    fn confirm_oversize(&self, warning: &OversizeWarning) -> bool;
}

/// A fixed answer, for callers that decide up front
impl ConfirmPrompt for Confirmation {
    fn confirm_oversize(&self, _warning: &OversizeWarning) -> bool {
        *self == Confirmation::Confirmed
    }
}

/// An editing session over one loaded file.
///
/// The session exclusively owns the canonical [`ByteBuffer`]. Sub-file
/// replacement publishes a new generation and drops the cached scan results,
/// which then have to be rebuilt with [`Session::index`]. Repacking text only
/// produces an exported copy; the canonical buffer stays as it was.
#[derive(Debug)]
pub struct Session {
    name: String,
    buffer: ByteBuffer,
    translations: PendingTranslations,
    strings: Vec<StringRecord>,
    carved: Vec<CarvedRecord>,
}

impl Session {
    pub fn load(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        let name = name.into();
        let buffer = ByteBuffer::new(bytes);
        info!("Loaded {} ({} bytes)", name, buffer.len());
        Self {
            name,
            buffer,
            translations: PendingTranslations::new(),
            strings: Vec::new(),
            carved: Vec::new(),
        }
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::load(name, bytes))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn buffer(&self) -> &ByteBuffer {
        &self.buffer
    }

    pub fn generation(&self) -> u64 {
        self.buffer.generation()
    }

    /// String records from the last scan of the current generation
    pub fn strings(&self) -> &[StringRecord] {
        &self.strings
    }

    /// Carved records from the last scan of the current generation
    pub fn carved(&self) -> &[CarvedRecord] {
        &self.carved
    }

    pub fn carved_record(&self, id: usize) -> Option<&CarvedRecord> {
        self.carved.iter().find(|record| record.id == id)
    }

    pub fn translations(&self) -> &PendingTranslations {
        &self.translations
    }

    pub fn set_translation(&mut self, offset: usize, text: impl Into<String>) {
        self.translations.set(offset, text);
    }

    pub fn scan_strings(&mut self, options: &TextOptions) -> Result<&[StringRecord]> {
        self.strings = text::scan_strings(&self.buffer, options.min_length, &options.charset)?;
        Ok(&self.strings)
    }

    pub fn carve(&mut self) -> &[CarvedRecord] {
        self.carved = carve::carve(&self.buffer);
        &self.carved
    }

    /// Run the string scan and the carver side by side on the current snapshot.
    ///
    /// An unsupported charset fails before either scan starts and leaves the
    /// previous results in place.
    pub fn index(&mut self, options: &TextOptions) -> Result<()> {
        let scanner = StringScanner::new(options.min_length, &options.charset)?;
        let snapshot = &self.buffer;

        let (strings, carved) = thread::scope(|scope| {
            let carver = scope.spawn(|| carve::carve(snapshot));
            let strings = scanner.scan(snapshot);
            let carved = carver
                .join()
                .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
            (strings, carved)
        });

        info!(
            "Indexed generation {}: {} strings, {} carved regions",
            self.buffer.generation(),
            strings.len(),
            carved.len()
        );
        self.strings = strings;
        self.carved = carved;
        Ok(())
    }

    pub fn extract(&self, record: &CarvedRecord) -> Result<Extraction> {
        carve::extract(&self.buffer, record)
    }

    pub fn propose_replace(&self, record: &CarvedRecord, data: Vec<u8>) -> Result<ReplaceProposal> {
        carve::propose_replace(&self.buffer, record, data)
    }

    /// Commit a proposal and make the result the canonical buffer
    pub fn commit_replace(
        &mut self,
        proposal: ReplaceProposal,
        confirmation: Confirmation,
    ) -> Result<ReplaceOutcome> {
        let (buffer, outcome) = carve::commit_replace(&self.buffer, proposal, confirmation)?;
        self.publish(buffer);
        Ok(outcome)
    }

    /// Replace a carved region, asking `prompt` only when the data is oversize
    pub fn replace_sub_file(
        &mut self,
        record: &CarvedRecord,
        data: Vec<u8>,
        prompt: &dyn ConfirmPrompt,
    ) -> Result<ReplaceOutcome> {
        let proposal = self.propose_replace(record, data)?;
        let confirmation = match proposal.warning() {
            Some(warning) => Confirmation::from(prompt.confirm_oversize(warning)),
            None => Confirmation::Declined,
        };
        self.commit_replace(proposal, confirmation)
    }

    /// Patch pending translations into a copy of the canonical buffer
    pub fn repack(&self, options: &TextOptions) -> Result<(ByteBuffer, RepackReport)> {
        let charset = Charset::for_export(&options.export_charset)?;
        if self.strings.is_empty() && !self.translations.is_empty() {
            warn!(
                "No string index for generation {}; every translation will be unmatched",
                self.buffer.generation()
            );
        }
        Ok(text::repack(
            &self.buffer,
            &self.strings,
            &self.translations,
            charset,
        ))
    }

    pub fn export_memory(&self) -> TranslationMemory {
        TranslationMemory::build(&self.strings, &self.translations)
    }

    /// Merge a translation memory document.
    ///
    /// The document is parsed completely first; a malformed one leaves the
    /// pending translations untouched.
    pub fn import_memory(&mut self, content: &str) -> Result<ImportSummary> {
        let memory = TranslationMemory::from_json(content)?;
        Ok(memory.merge_into(&mut self.translations))
    }

    /// `MODDED_{name}`
    pub fn modded_name(&self) -> String {
        modded_file_name(&self.name)
    }

    /// `{name}_translation.json`
    pub fn memory_name(&self) -> String {
        memory_file_name(&self.name)
    }

    fn publish(&mut self, buffer: ByteBuffer) {
        debug!(
            "Publishing generation {} (was {}), dropping {} strings and {} carved records",
            buffer.generation(),
            self.buffer.generation(),
            self.strings.len(),
            self.carved.len()
        );
        self.buffer = buffer;
        self.strings.clear();
        self.carved.clear();
    }
}
