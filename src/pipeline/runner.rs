//! Pipeline runner — orchestrates stage execution and artifact flow.
//!
//! The [`Pipeline`] runs the five summarization stages in order:
//!
//! 1. Segment the text into sentences
//! 2. Vectorize the sentences (TF-IDF)
//! 3. Build the similarity graph
//! 4. Rank sentences with PageRank
//! 5. Select the top fraction in document order
//!
//! Inputs with fewer than two sentences skip stages 2–5 and come back
//! delimiter-normalized but otherwise unchanged. Nothing is cached between
//! runs, so one `Pipeline` can serve many threads.

use crate::errors::Result;
use crate::graph::csr::CsrGraph;
use crate::graph::similarity::SimilarityGraph;
use crate::nlp::segmenter::Segmenter;
use crate::pagerank::standard::StandardPageRank;
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, StageReportBuilder, STAGE_GRAPH,
    STAGE_RANK, STAGE_SEGMENT, STAGE_SELECT, STAGE_VECTORIZE,
};
use crate::summarizer::selector::SentenceSelector;
use crate::summarizer::vectorizer::TfIdfVectorizer;
use crate::types::{Summary, SummarizerConfig};
use rayon::prelude::*;

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// The summarization pipeline
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: SummarizerConfig,
    segmenter: Segmenter,
    vectorizer: TfIdfVectorizer,
    ranker: StandardPageRank,
}

impl Pipeline {
    /// Build a pipeline from a validated config
    pub fn new(config: SummarizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            segmenter: Segmenter::new(config.delimiter, config.placeholder),
            vectorizer: TfIdfVectorizer::new(),
            ranker: StandardPageRank::from_config(&config),
            config,
        })
    }

    /// The config this pipeline was built from
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Summarize without observing stages
    pub fn summarize(&self, text: &str) -> Result<Summary> {
        self.run(text, &mut NoopObserver)
    }

    /// Execute the pipeline, producing a [`Summary`].
    ///
    /// The `observer` receives callbacks at each stage boundary. Pass
    /// [`NoopObserver`] for zero-overhead execution.
    pub fn run(&self, text: &str, observer: &mut impl PipelineObserver) -> Result<Summary> {
        // Stage 1: Segment
        let (normalized, sentences) = {
            trace_stage!(STAGE_SEGMENT);
            observer.on_stage_start(STAGE_SEGMENT);
            let clock = StageClock::start();
            let normalized = self.segmenter.normalize(text);
            let sentences = self.segmenter.split_normalized(&normalized);
            observer.on_stage_end(STAGE_SEGMENT, &StageReport::new(clock.elapsed()));
            observer.on_sentences(&sentences);
            (normalized, sentences)
        };

        if sentences.len() < 2 {
            return Ok(Summary::passthrough(normalized, sentences.len()));
        }

        // Stage 2: Vectorize
        let matrix = {
            trace_stage!(STAGE_VECTORIZE);
            observer.on_stage_start(STAGE_VECTORIZE);
            let clock = StageClock::start();
            let matrix = self.vectorizer.vectorize(&sentences)?;
            observer.on_stage_end(STAGE_VECTORIZE, &StageReport::new(clock.elapsed()));
            matrix
        };

        // Stage 3: Build graph
        let csr = {
            trace_stage!(STAGE_GRAPH);
            observer.on_stage_start(STAGE_GRAPH);
            let clock = StageClock::start();
            let graph = SimilarityGraph::build(&matrix);
            let csr = CsrGraph::from_similarity(&graph);
            let report = StageReportBuilder::new(clock.elapsed())
                .nodes(csr.num_nodes)
                .edges(csr.num_edges())
                .build();
            observer.on_stage_end(STAGE_GRAPH, &report);
            observer.on_graph(&graph);
            csr
        };

        // Stage 4: Rank
        let ranking = {
            trace_stage!(STAGE_RANK);
            observer.on_stage_start(STAGE_RANK);
            let clock = StageClock::start();
            let ranking = self.ranker.run(&csr)?;
            let report = StageReportBuilder::new(clock.elapsed())
                .nodes(csr.num_nodes)
                .iterations(ranking.iterations)
                .build();
            observer.on_stage_end(STAGE_RANK, &report);
            observer.on_rank(&ranking);
            ranking
        };

        // Stage 5: Select
        trace_stage!(STAGE_SELECT);
        observer.on_stage_start(STAGE_SELECT);
        let clock = StageClock::start();
        let summary =
            SentenceSelector::from_config(&self.config).select(&sentences, &ranking.scored());
        observer.on_stage_end(STAGE_SELECT, &StageReport::new(clock.elapsed()));

        Ok(summary)
    }

    /// Summarize independent texts in parallel, one full run per text
    pub fn summarize_all<S>(&self, texts: &[S]) -> Vec<Result<Summary>>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.summarize(text.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TextRankError;
    use crate::pagerank::PageRankResult;
    use crate::types::Sentence;

    const ARTICLE: &str = "भारत एक विशाल देश है। भारत की राजधानी दिल्ली है। \
        दिल्ली एक बड़ा शहर है। मुंबई भारत का सबसे बड़ा शहर है। \
        आज मौसम अच्छा है।";

    #[derive(Default)]
    struct RecordingObserver {
        started: Vec<&'static str>,
        ended: Vec<&'static str>,
        sentences: usize,
        graph_nodes: Option<usize>,
        rank_sum: Option<f64>,
    }

    impl PipelineObserver for RecordingObserver {
        fn on_stage_start(&mut self, stage: &'static str) {
            self.started.push(stage);
        }

        fn on_stage_end(&mut self, stage: &'static str, _report: &StageReport) {
            self.ended.push(stage);
        }

        fn on_sentences(&mut self, sentences: &[Sentence]) {
            self.sentences = sentences.len();
        }

        fn on_graph(&mut self, graph: &SimilarityGraph) {
            self.graph_nodes = Some(graph.num_nodes);
        }

        fn on_rank(&mut self, result: &PageRankResult) {
            self.rank_sum = Some(result.scores.iter().sum());
        }
    }

    fn pipeline() -> Pipeline {
        Pipeline::new(SummarizerConfig::default()).unwrap()
    }

    #[test]
    fn test_stages_run_in_order() {
        let mut observer = RecordingObserver::default();
        let summary = pipeline().run(ARTICLE, &mut observer).unwrap();

        let expected = vec![
            STAGE_SEGMENT,
            STAGE_VECTORIZE,
            STAGE_GRAPH,
            STAGE_RANK,
            STAGE_SELECT,
        ];
        assert_eq!(observer.started, expected);
        assert_eq!(observer.ended, expected);
        assert_eq!(observer.sentences, 5);
        assert_eq!(observer.graph_nodes, Some(5));
        assert!((observer.rank_sum.unwrap() - 1.0).abs() < 1e-6);
        assert_eq!(summary.num_sentences, 5);
        assert_eq!(summary.selected.len(), 2);
    }

    #[test]
    fn test_short_input_skips_ranking() {
        let mut observer = RecordingObserver::default();
        let summary = pipeline().run("केवल एक वाक्य?", &mut observer).unwrap();

        assert_eq!(observer.started, vec![STAGE_SEGMENT]);
        assert!(summary.is_passthrough());
        assert_eq!(summary.text, "केवल एक वाक्य।");
    }

    #[test]
    fn test_off_topic_sentence_not_selected() {
        let summary = pipeline().summarize(ARTICLE).unwrap();

        assert!(!summary.indices().contains(&4));
        assert!(summary.indices().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_degenerate_input() {
        let result = pipeline().summarize("... । !!! ।");
        assert!(matches!(result, Err(TextRankError::DegenerateInput)));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = Pipeline::new(SummarizerConfig::new().with_ratio(4.0));
        assert!(matches!(result, Err(TextRankError::InvalidConfig(_))));
    }

    #[test]
    fn test_summarize_all_matches_sequential() {
        let texts = vec![ARTICLE.to_string(), "अ। ब। स। द।".to_string(), String::new()];
        let p = pipeline();

        let parallel = p.summarize_all(&texts);
        assert_eq!(parallel.len(), 3);
        for (text, result) in texts.iter().zip(parallel) {
            assert_eq!(result.unwrap(), p.summarize(text).unwrap());
        }
    }
}
