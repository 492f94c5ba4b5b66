//! AnswerEngine: orchestrates the full extraction pipeline.
//!
//! Construction: normalize the query → have the index rank every document
//! → slice the pagination window → fetch the window's pages → attach
//! similarity scores.
//! `get_answers`: tagged-query analysis → page analysis → per-sentence
//! matching → ordered answer list.

use std::sync::Arc;

use tracing::{debug, info};
use whyfind_core::config::ExtractionConfig;
use whyfind_core::errors::{IndexError, WhyfindResult};
use whyfind_core::models::{Answer, AnswerSet, TaggedQuery};
use whyfind_core::traits::{IDocument, IIndex, ILexicon, ITagger, ITokenizer};

use crate::matcher::SentenceMatcher;
use crate::pages::analyze_pages;
use crate::query::QueryAnalyzer;

/// The pagination window. Pages stay uniquely owned until page analysis
/// completes; only then do they move behind `Arc` so answers can share
/// their source page. Callers therefore never hold an aliased handle to a
/// page that still needs in-place mutation.
enum PageWindow {
    Pending(Vec<Box<dyn IDocument>>),
    Analyzed(Vec<Arc<dyn IDocument>>),
}

/// Turns one query into a list of extracted answers.
///
/// Self-contained: owns its query, pagination window, and analyzed pages,
/// and shares nothing with other engine instances, so independent engines
/// may run concurrently in separate workers (see [`crate::worker`]).
pub struct AnswerEngine<'a> {
    tagger: &'a dyn ITagger,
    lexicon: &'a dyn ILexicon,
    tokenizer: &'a dyn ITokenizer,
    /// The direct query string from the user.
    query: String,
    /// The normalized token sequence sent to the IR index.
    ir_query: Vec<String>,
    /// Computed once on the first `get_answers` call.
    tagged_query: Option<TaggedQuery>,
    config: ExtractionConfig,
    /// Total number of documents the index ranked for this query.
    num_pages: usize,
    /// The pagination window, in rank order.
    pages: PageWindow,
    answers: Option<AnswerSet>,
}

impl<'a> AnswerEngine<'a> {
    /// Build an engine by querying the IR index for the candidate pages.
    ///
    /// Ranks all documents against the normalized query, slices the
    /// configured pagination window, fetches the window's pages, and
    /// attaches each page's rank-derived similarity score. Errors if the
    /// window falls outside the ranked results or the index misbehaves.
    pub fn new(
        index: &dyn IIndex,
        tagger: &'a dyn ITagger,
        lexicon: &'a dyn ILexicon,
        tokenizer: &'a dyn ITokenizer,
        query: &str,
        config: ExtractionConfig,
    ) -> WhyfindResult<Self> {
        let ir_query = tokenizer.normalize(&tokenizer.tokenize(query));

        let ranked = index.ranked(&ir_query)?;
        let num_pages = ranked.len();
        let (lo, hi) = config.window(num_pages)?;
        let window = &ranked[lo..hi];
        debug!(
            query,
            ranked = num_pages,
            window = window.len(),
            "candidate pages selected"
        );

        let (ids, scores): (Vec<_>, Vec<_>) = window.iter().copied().unzip();
        let fetched = index.get_page(&ids)?;
        if fetched.len() != ids.len() {
            return Err(IndexError::PageCountMismatch {
                requested: ids.len(),
                returned: fetched.len(),
            }
            .into());
        }

        let mut pages = fetched;
        for (page, score) in pages.iter_mut().zip(scores) {
            page.set_similarity(score);
        }

        Ok(Self {
            tagger,
            lexicon,
            tokenizer,
            query: query.to_string(),
            ir_query,
            tagged_query: None,
            config,
            num_pages,
            pages: PageWindow::Pending(pages),
            answers: None,
        })
    }

    /// Run the pipeline and return the extracted answers.
    ///
    /// Stages run in strict order: query analysis, page analysis over the
    /// whole window, then sentence extraction. The result is cached on the
    /// engine; with deterministic collaborators a second call returns an
    /// equal answer set.
    pub fn get_answers(&mut self) -> WhyfindResult<AnswerSet> {
        self.analyze_query()?;
        self.analyze_pages()?;
        self.extract_answers()?;
        Ok(self
            .answers
            .clone()
            .unwrap_or_else(|| unreachable!("extraction just populated the answers")))
    }

    fn analyze_query(&mut self) -> WhyfindResult<()> {
        if self.tagged_query.is_none() {
            let analyzer = QueryAnalyzer::new(self.tagger, self.lexicon);
            let tagged = analyzer.analyze(&self.ir_query)?;
            debug!(terms = tagged.len(), "query analyzed");
            self.tagged_query = Some(tagged);
        }
        Ok(())
    }

    fn analyze_pages(&mut self) -> WhyfindResult<()> {
        // Pages are analyzed once per engine. An error leaves the window
        // pending; preprocessing is idempotent, so the call can be retried.
        if let PageWindow::Pending(pending) = &mut self.pages {
            analyze_pages(pending)?;
            let analyzed: Vec<Arc<dyn IDocument>> = std::mem::take(pending)
                .into_iter()
                .map(Arc::from)
                .collect();
            self.pages = PageWindow::Analyzed(analyzed);
        }
        Ok(())
    }

    fn extract_answers(&mut self) -> WhyfindResult<()> {
        let tagged = self
            .tagged_query
            .as_ref()
            .unwrap_or_else(|| unreachable!("query analysis precedes extraction"));
        let matcher = SentenceMatcher::new(
            self.lexicon,
            self.tokenizer,
            self.config.relatedness_threshold,
        );

        let pages = match &self.pages {
            PageWindow::Analyzed(pages) => pages,
            PageWindow::Pending(_) => unreachable!("page analysis precedes extraction"),
        };

        let mut answers = Vec::new();
        for page in pages {
            for sentence in page.sentences() {
                if matcher.matches(sentence, tagged)? {
                    answers.push(Answer::new(Arc::clone(page), sentence.join(" ")));
                }
            }
        }
        info!(
            query = %self.query,
            pages = pages.len(),
            answers = answers.len(),
            "extraction complete"
        );
        self.answers = Some(answers);
        Ok(())
    }

    /// The normalized token sequence sent to the IR index.
    pub fn ir_query(&self) -> &[String] {
        &self.ir_query
    }

    /// The tagged query, once `get_answers` has run.
    pub fn tagged_query(&self) -> Option<&TaggedQuery> {
        self.tagged_query.as_ref()
    }

    /// Total number of documents the index ranked for this query (usually
    /// more than the window holds).
    pub fn num_pages(&self) -> usize {
        self.num_pages
    }

    /// The candidate pages in rank order.
    pub fn pages(&self) -> Vec<&dyn IDocument> {
        match &self.pages {
            PageWindow::Pending(pages) => pages.iter().map(|page| page.as_ref()).collect(),
            PageWindow::Analyzed(pages) => pages.iter().map(|page| page.as_ref()).collect(),
        }
    }

    /// The cached answers from the last `get_answers` call.
    pub fn answers(&self) -> Option<&AnswerSet> {
        self.answers.as_ref()
    }
}
