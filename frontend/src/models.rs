//! Mock CMS 数据，供 `--features mock` 离线开发使用。
//!
//! The fixture set spans two pages so the load-more flow is exercisable
//! without a CMS: the first page carries a synthetic cursor, the second
//! closes the feed. One document is undated to exercise the clock fallback.

use chrono::{DateTime, TimeZone, Utc};
use spacetrail_shared::{
    Banner, BlockKind, ContentSection, PostData, PostDocument, PostPage, PostSummary,
    PostSummaryData, RichTextBlock, Span, SpanData, SpanKind,
};

/// Synthetic cursor delivered with the first mock page.
pub const MOCK_NEXT_PAGE: &str = "mock://documents/search?page=2";

/// First listing page: three summaries plus the synthetic cursor.
pub fn mock_search(page_size: usize) -> PostPage {
    let mut results: Vec<PostSummary> = mock_documents().iter().take(3).map(summary_of).collect();
    results.truncate(page_size);
    PostPage {
        results,
        next_page: Some(MOCK_NEXT_PAGE.to_string()),
    }
}

/// Resolve a cursor URL to its page. Only the synthetic cursor is known.
pub fn mock_page(url: &str) -> Option<PostPage> {
    (url == MOCK_NEXT_PAGE).then(|| PostPage {
        results: mock_documents().iter().skip(3).map(summary_of).collect(),
        next_page: None,
    })
}

/// Full document by slug.
pub fn mock_document(slug: &str) -> Option<PostDocument> {
    mock_documents().into_iter().find(|doc| doc.uid == slug)
}

fn summary_of(doc: &PostDocument) -> PostSummary {
    PostSummary {
        uid: doc.uid.clone(),
        first_publication_date: doc.first_publication_date,
        data: PostSummaryData {
            title: doc.data.title.clone(),
            subtitle: doc.data.subtitle.clone(),
            author: doc.data.author.clone(),
        },
    }
}

fn mock_documents() -> Vec<PostDocument> {
    vec![
        post(
            "como-planejar-uma-viagem-orbital",
            date(2022, 3, 18),
            "Como planejar uma viagem orbital",
            "Do treinamento à janela de lançamento",
            "Ana Duarte",
            vec![
                section(
                    "Antes do lançamento",
                    vec![
                        paragraph_with(
                            "Toda missão começa meses antes, com simulações diárias e muita \
                             paciência.",
                            vec![span(0, 11, SpanKind::Strong, None)],
                        ),
                        list_item("Exames médicos completos"),
                        list_item("Treino de microgravidade"),
                        list_item("Estudo dos sistemas da cápsula"),
                    ],
                ),
                section(
                    "A janela de lançamento",
                    vec![
                        paragraph(
                            "A janela ideal depende da inclinação da órbita e do clima na base. \
                             Perder a janela significa esperar semanas.",
                        ),
                        paragraph_with(
                            "Os detalhes estão no manual público da agência.",
                            vec![span(
                                21,
                                35,
                                SpanKind::Hyperlink,
                                Some("https://example.com/manual-orbital"),
                            )],
                        ),
                    ],
                ),
            ],
        ),
        post(
            "guia-dos-aneis-de-saturno",
            date(2022, 1, 7),
            "Guia dos anéis de Saturno",
            "Sete anéis, bilhões de fragmentos de gelo",
            "Rafael Lima",
            vec![section(
                "O que os anéis escondem",
                vec![
                    paragraph_with(
                        "Os anéis parecem sólidos vistos da Terra, mas são nuvens de gelo e \
                         poeira em órbita.",
                        vec![span(50, 64, SpanKind::Em, None)],
                    ),
                    heading3("Divisão de Cassini"),
                    paragraph(
                        "Um vão de quase cinco mil quilômetros separa os anéis A e B, mantido \
                         pela ressonância com a lua Mimas.",
                    ),
                ],
            )],
        ),
        post(
            "vida-a-bordo-da-estacao",
            date(2021, 11, 23),
            "Vida a bordo da estação",
            "Rotina, comida e sono em queda livre",
            "Ana Duarte",
            vec![section(
                "Um dia em órbita",
                vec![
                    paragraph(
                        "A tripulação vê dezesseis nasceres do sol por dia, o que bagunça \
                         qualquer relógio biológico.",
                    ),
                    ordered_item("Acordar às 06:00 GMT"),
                    ordered_item("Duas horas de exercício obrigatório"),
                    ordered_item("Manutenção e experimentos até o jantar"),
                ],
            )],
        ),
        post(
            "fotografando-nebulosas",
            date(2021, 6, 2),
            "Fotografando nebulosas",
            "Longas exposições para objetos fracos",
            "Marina Castro",
            vec![section(
                "Equipamento mínimo",
                vec![
                    paragraph(
                        "Uma montagem equatorial estável importa mais que a abertura do \
                         telescópio.",
                    ),
                    preformatted("exposição: 300s\niso: 800\nempilhamento: 40 quadros"),
                ],
            )],
        ),
        post(
            "combustivel-para-foguetes",
            None,
            "Combustível para foguetes",
            "Rascunho: química de propelentes líquidos",
            "Rafael Lima",
            vec![section(
                "Oxidante e combustível",
                vec![paragraph(
                    "Hidrogênio líquido rende mais impulso específico, mas exige tanques \
                     criogênicos enormes.",
                )],
            )],
        ),
    ]
}

fn post(
    uid: &str,
    first_publication_date: Option<DateTime<Utc>>,
    title: &str,
    subtitle: &str,
    author: &str,
    content: Vec<ContentSection>,
) -> PostDocument {
    PostDocument {
        uid: uid.to_string(),
        first_publication_date,
        data: PostData {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            banner: Banner {
                url: format!("https://images.example.com/banners/{uid}.jpg"),
            },
            author: author.to_string(),
            content,
        },
    }
}

fn date(year: i32, month: u32, day: u32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, 10, 0, 0).single()
}

fn section(heading: &str, body: Vec<RichTextBlock>) -> ContentSection {
    ContentSection {
        heading: heading.to_string(),
        body,
    }
}

fn block(kind: BlockKind, text: &str, spans: Vec<Span>) -> RichTextBlock {
    RichTextBlock {
        kind,
        text: text.to_string(),
        spans,
    }
}

fn paragraph(text: &str) -> RichTextBlock {
    block(BlockKind::Paragraph, text, vec![])
}

fn paragraph_with(text: &str, spans: Vec<Span>) -> RichTextBlock {
    block(BlockKind::Paragraph, text, spans)
}

fn heading3(text: &str) -> RichTextBlock {
    block(BlockKind::Heading3, text, vec![])
}

fn list_item(text: &str) -> RichTextBlock {
    block(BlockKind::ListItem, text, vec![])
}

fn ordered_item(text: &str) -> RichTextBlock {
    block(BlockKind::OListItem, text, vec![])
}

fn preformatted(text: &str) -> RichTextBlock {
    block(BlockKind::Preformatted, text, vec![])
}

fn span(start: usize, end: usize, kind: SpanKind, url: Option<&str>) -> Span {
    Span {
        start,
        end,
        kind,
        data: url.map(|url| SpanData {
            url: Some(url.to_string()),
        }),
    }
}
