//! Curated scripture citations per theme.
//!
//! Citations are opaque strings (`"<Book> <Chapter>:<Verse> - <text>"`) and are
//! never split into their parts.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::catalog::Theme;

/// Number of verses woven into each prompt.
pub const DEFAULT_VERSE_COUNT: usize = 2;

const PATIENCE: &[&str] = &[
    "Romans 8:25 - But if we hope for what we do not yet have, we wait for it patiently.",
    "Psalm 37:7 - Be still before the Lord and wait patiently for him.",
    "James 1:4 - Let perseverance finish its work so that you may be mature and complete.",
    "Galatians 6:9 - Let us not become weary in doing good, for at the proper time we will reap a harvest.",
    "Hebrews 10:36 - You need to persevere so that when you have done the will of God, you will receive what he has promised.",
];

const FORGIVENESS: &[&str] = &[
    "Colossians 3:13 - Bear with each other and forgive one another. Forgive as the Lord forgave you.",
    "Matthew 6:14-15 - For if you forgive other people when they sin against you, your heavenly Father will also forgive you.",
    "Ephesians 4:32 - Be kind and compassionate to one another, forgiving each other, just as in Christ God forgave you.",
    "Mark 11:25 - And when you stand praying, if you hold anything against anyone, forgive them, so that your Father in heaven may forgive you your sins.",
];

const LEADERSHIP: &[&str] = &[
    "Proverbs 11:14 - For lack of guidance a nation falls, but victory is won through many advisers.",
    "1 Peter 5:2-3 - Be shepherds of God's flock that is under your care, watching over them.",
    "Matthew 20:26-28 - Whoever wants to become great among you must be your servant.",
    "Romans 12:8 - If it is to lead, do it diligently; if it is to show mercy, do it cheerfully.",
];

const HOPE: &[&str] = &[
    "Jeremiah 29:11 - For I know the plans I have for you, declares the Lord, plans to prosper you and not to harm you, plans to give you hope and a future.",
    "Romans 15:13 - May the God of hope fill you with all joy and peace as you trust in him.",
    "Psalm 62:5-6 - Yes, my soul, find rest in God; my hope comes from him.",
];

const LOVE: &[&str] = &[
    "1 Corinthians 13:4-7 - Love is patient, love is kind. It does not envy, it does not boast, it is not proud.",
    "John 3:16 - For God so loved the world that he gave his one and only Son, that whoever believes in him shall not perish but have eternal life.",
    "Romans 5:8 - But God demonstrates his own love for us in this: While we were still sinners, Christ died for us.",
    "Colossians 3:14 - And over all these virtues put on love, which binds them all together in perfect unity.",
];

const FAITH: &[&str] = &[
    "Hebrews 11:1 - Now faith is confidence in what we hope for and assurance about what we do not see.",
    "Romans 10:17 - Consequently, faith comes from hearing the message, and the message is heard through the word about Christ.",
    "James 2:17 - In the same way, faith by itself, if it is not accompanied by action, is dead.",
    "2 Corinthians 5:7 - For we live by faith, not by sight.",
];

const GRATITUDE: &[&str] = &[
    "1 Thessalonians 5:18 - Give thanks in all circumstances; for this is God's will for you in Christ Jesus.",
    "Psalm 107:1 - Give thanks to the Lord, for he is good; his love endures forever.",
    "Colossians 3:17 - And whatever you do, do it all in the name of the Lord Jesus, giving thanks to God the Father through him.",
    "Psalm 100:4 - Enter his gates with thanksgiving and his courts with praise; give thanks to him and praise his name.",
];

const COURAGE: &[&str] = &[
    "Joshua 1:9 - Have I not commanded you? Be strong and courageous. Do not be afraid.",
    "Deuteronomy 31:6 - Be strong and courageous. Do not be afraid or terrified because of them, for the Lord your God goes with you.",
    "Psalm 27:1 - The Lord is my light and my salvation. Whom shall I fear? The Lord is the stronghold of my life.",
];

const WISDOM: &[&str] = &[
    "Proverbs 3:5-6 - Trust in the Lord with all your heart and lean not on your own understanding.",
    "James 1:5 - If any of you lacks wisdom, you should ask God, who gives generously to all without finding fault.",
    "Proverbs 4:6-7 - Do not forsake wisdom, and she will protect you; love her, and she will watch over you.",
];

const JOY: &[&str] = &[
    "Psalm 16:11 - You make known to me the path of life; you will fill me with joy in your presence.",
    "Philippians 4:4 - Rejoice in the Lord always. I will say it again: Rejoice!",
    "Nehemiah 8:10 - Do not grieve, for the joy of the Lord is your strength.",
];

const KINDNESS: &[&str] = &[
    "Ephesians 4:32 - Be kind and compassionate to one another, forgiving each other, just as in Christ God forgave you.",
    "Proverbs 11:17 - A kind person benefits themselves, but a cruel person brings trouble on themselves.",
    "Colossians 3:12 - Clothe yourselves with compassion, kindness, humility, gentleness and patience.",
];

const HUMILITY: &[&str] = &[
    "Philippians 2:3-4 - Do nothing out of selfish ambition or vain conceit. Rather, in humility value others above yourselves.",
    "Proverbs 22:4 - Humility is the fear of the Lord; its wages are riches and honor and life.",
    "James 4:10 - Humble yourselves before the Lord, and he will lift you up.",
];

/// All curated citations for `theme`. Empty for themes without a curated list.
pub fn verses_for(theme: Theme) -> &'static [&'static str] {
    match theme {
        Theme::Patience => PATIENCE,
        Theme::Forgiveness => FORGIVENESS,
        Theme::Leadership => LEADERSHIP,
        Theme::Hope => HOPE,
        Theme::Love => LOVE,
        Theme::Faith => FAITH,
        Theme::Gratitude => GRATITUDE,
        Theme::Courage => COURAGE,
        Theme::Wisdom => WISDOM,
        Theme::Joy => JOY,
        Theme::Kindness => KINDNESS,
        Theme::Humility => HUMILITY,
        // No curated scripture yet; prompts for these carry no verse block.
        Theme::Peace
        | Theme::Trust
        | Theme::Perseverance
        | Theme::Compassion
        | Theme::Faithfulness
        | Theme::Grace
        | Theme::Mercy
        | Theme::Obedience
        | Theme::Worship
        | Theme::Service
        | Theme::Sacrifice
        | Theme::Purpose => &[],
    }
}

/// Picks `min(count, available)` distinct citations for `theme`. Order is arbitrary.
pub fn sample_verses<R: Rng + ?Sized>(
    theme: Theme,
    count: usize,
    rng: &mut R,
) -> Vec<&'static str> {
    verses_for(theme)
        .choose_multiple(rng, count)
        .copied()
        .collect()
}

/// `sample_verses` with the thread-local RNG.
pub fn random_verses(theme: Theme, count: usize) -> Vec<&'static str> {
    sample_verses(theme, count, &mut rand::rng())
}
