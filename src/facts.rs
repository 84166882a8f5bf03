//! The built-in "Did You Know?" entries.
//!
//! Order matters: an entry's position is its slot in the daily rotation.

use crate::fact::Category::*;
use crate::fact::FactRecord;

pub static BUILTIN_FACTS: &[FactRecord] = &[
    FactRecord::from_static(
        "yahuah-frequency",
        Names,
        "The name \"Yahuah\" (יהוה) appears over 6,800 times in the Hebrew Scriptures, making it the most frequently used name for the Most High. Each occurrence represents a direct connection to the divine covenant.",
        Some("📖"),
    ),
    FactRecord::from_static(
        "elohiym-plural",
        Names,
        "The word \"Elohiym\" (אֱלֹהִים) is grammatically plural but typically takes singular verbs, hinting at the complex unity of the divine nature. It appears over 2,500 times in the Hebrew Bible.",
        Some("✨"),
    ),
    FactRecord::from_static(
        "yahusha-meaning",
        Names,
        "The name \"Yahusha\" literally means \"Yahuah is Salvation.\" It combines \"Yah\" (shortened form of Yahuah) with \"yasha\" (to save), revealing the mission and identity of the Messiah.",
        Some("🌟"),
    ),
    FactRecord::from_static(
        "ruach-breath",
        Names,
        "The Hebrew word \"Ruach\" (רוּחַ) means wind, breath, or spirit. In Genesis 1:2, the \"Ruach Elohiym\" (Spirit of God) moved over the waters, showing the life-giving breath of creation.",
        Some("💨"),
    ),
    FactRecord::from_static(
        "bible-stats",
        Statistics,
        "The Bible contains 66 books written by over 40 different authors across approximately 1,500 years, yet maintains remarkable thematic unity and consistency.",
        Some("📚"),
    ),
    FactRecord::from_static(
        "psalm-119",
        Statistics,
        "Psalm 119 is the longest chapter in the Bible with 176 verses. It's an acrostic poem where each section corresponds to a letter of the Hebrew alphabet, celebrating the Torah.",
        Some("✍️"),
    ),
    FactRecord::from_static(
        "shortest-verse",
        Statistics,
        "The shortest verse in the Bible is John 11:35: \"Jesus wept.\" Just two words in English, but it reveals the deep compassion and humanity of Yahusha.",
        Some("💧"),
    ),
    FactRecord::from_static(
        "middle-verse",
        Statistics,
        "Psalm 118:8 is considered the middle verse of the Bible: \"It is better to trust in Yahuah than to put confidence in man.\" A powerful central message!",
        Some("🎯"),
    ),
    FactRecord::from_static(
        "translators-notes",
        Translation,
        "The KJV translators added notes in curly braces to show where they added words for English clarity or to provide literal Hebrew meanings. These marginal notes help readers understand translation choices.",
        Some("📝"),
    ),
    FactRecord::from_static(
        "tetragrammaton",
        Translation,
        "The four Hebrew letters YHWH (יהוה), called the Tetragrammaton, were considered too sacred to pronounce by some Jewish traditions. Many English Bibles replaced it with \"LORD\" in all capitals.",
        Some("🔤"),
    ),
    FactRecord::from_static(
        "septuagint",
        History,
        "The Septuagint, a Greek translation of the Hebrew Bible completed around 250 BCE, was widely used in the first century and is frequently quoted in the New Testament.",
        Some("🏛️"),
    ),
    FactRecord::from_static(
        "dead-sea-scrolls",
        History,
        "The Dead Sea Scrolls, discovered in 1947, include copies of biblical texts over 1,000 years older than previously known manuscripts, confirming the remarkable preservation of Scripture.",
        Some("📜"),
    ),
    FactRecord::from_static(
        "hebrew-alphabet",
        Insight,
        "Each letter of the Hebrew alphabet has a numeric value and symbolic meaning. Ancient readers saw layers of meaning in the very letters of Scripture that we miss in translation.",
        Some("🔢"),
    ),
    FactRecord::from_static(
        "poetry-proportion",
        Statistics,
        "Approximately one-third of the Hebrew Bible is poetry, including Psalms, Proverbs, Song of Solomon, and large portions of the prophetic books.",
        Some("🎵"),
    ),
    FactRecord::from_static(
        "shema",
        Insight,
        "The Shema (Deuteronomy 6:4) - \"Hear, O Israel: Yahuah our Elohiym, Yahuah is one\" - has been the central confession of faith for Hebrews for over 3,000 years.",
        Some("🕊️"),
    ),
    FactRecord::from_static(
        "genesis-creation",
        Insight,
        "The first word of the Bible in Hebrew is \"Bereshit\" (בְּרֵאשִׁית), meaning \"In the beginning.\" Its first letter, Bet (ב), is the second letter of the alphabet, hinting that creation itself is not the absolute beginning.",
        Some("🌅"),
    ),
    FactRecord::from_static(
        "prophetic-books",
        Statistics,
        "There are 17 prophetic books in the Old Testament. The major prophets (Isaiah, Jeremiah, Ezekiel, Daniel) are called \"major\" not because they're more important, but because they're longer!",
        Some("📢"),
    ),
    FactRecord::from_static(
        "hallel",
        Insight,
        "Psalms 113-118, known as the \"Hallel\" (Praise), were sung during major Jewish festivals. Yahusha likely sang these with His disciples at the Last Supper (Matthew 26:30).",
        Some("🎶"),
    ),
    FactRecord::from_static(
        "languages",
        History,
        "The Bible has been translated into over 700 languages, with portions available in over 3,000 languages. It remains the most translated book in human history.",
        Some("🌍"),
    ),
    FactRecord::from_static(
        "messianic-prophecies",
        Insight,
        "Scholars have identified over 300 prophecies about the Messiah in the Old Testament. The mathematical probability of one person fulfilling just 48 of them is 1 in 10¹⁵⁷.",
        Some("⭐"),
    ),
    FactRecord::from_static(
        "longest-name",
        Names,
        "The longest name in the Bible is Mahershalalhashbaz (Isaiah 8:1), meaning \"swift is the booty, speedy is the prey.\" It was given as a prophetic sign to Isaiah's son.",
        Some("📛"),
    ),
    FactRecord::from_static(
        "aramaic-portions",
        Translation,
        "Parts of Daniel and Ezra were written in Aramaic, not Hebrew. Aramaic was the common language of the Near East during the Babylonian exile.",
        Some("🗣️"),
    ),
    FactRecord::from_static(
        "books-66",
        Statistics,
        "The Protestant Bible has 66 books (39 Old Testament, 27 New Testament), while Catholic Bibles include 7 additional books called the Deuterocanonical books or Apocrypha.",
        Some("📕"),
    ),
    FactRecord::from_static(
        "gospel-john-love",
        Statistics,
        "The Gospel of John mentions \"love\" more than any other Gospel - over 40 times. John emphasizes that Elohiym is love and that we should love one another.",
        Some("❤️"),
    ),
    FactRecord::from_static(
        "bronze-serpent",
        Insight,
        "The bronze serpent Moses lifted in the wilderness (Numbers 21:9) was a foreshadowing of Yahusha being lifted on the cross, as Yahusha Himself explained in John 3:14-15.",
        Some("🐍"),
    ),
    FactRecord::from_static(
        "book-of-job",
        History,
        "The Book of Job is considered one of the oldest books in the Bible, possibly written during the time of the patriarchs, even before Moses.",
        Some("⏳"),
    ),
    FactRecord::from_static(
        "alpha-omega",
        Names,
        "Yahusha calls Himself \"Alpha and Omega\" (Revelation 22:13), the first and last letters of the Greek alphabet, declaring His eternal nature and sovereignty over all history.",
        Some("🔠"),
    ),
    FactRecord::from_static(
        "proverbs-31",
        Insight,
        "Proverbs 31:10-31, the famous passage about the virtuous woman, is an acrostic poem in Hebrew, with each verse beginning with successive letters of the Hebrew alphabet.",
        Some("👑"),
    ),
    FactRecord::from_static(
        "ark-dimensions",
        Statistics,
        "Noah's Ark was approximately 450 feet long, 75 feet wide, and 45 feet high - about 1.5 million cubic feet of space, roughly equivalent to 450 semi-trailers!",
        Some("⛵"),
    ),
    FactRecord::from_static(
        "book-revelation",
        Statistics,
        "The Book of Revelation contains over 500 references to the Old Testament, making it deeply rooted in Hebrew Scripture and prophecy.",
        Some("📜"),
    ),
    FactRecord::from_static(
        "methuselah-age",
        Statistics,
        "Methuselah lived 969 years, the longest recorded human lifespan in Scripture. His name prophetically means \"when he dies, it shall come\" - he died the year of the flood.",
        Some("👴"),
    ),
    FactRecord::from_static(
        "paul-epistles",
        Statistics,
        "Paul wrote 13 epistles (or 14 if you include Hebrews) that comprise about one-third of the New Testament, making him its most prolific author.",
        Some("✉️"),
    ),
    FactRecord::from_static(
        "sabbath-rest",
        Insight,
        "The Hebrew word \"Shabbat\" (Sabbath) comes from a root meaning \"to cease\" or \"to rest,\" pointing to both creation rest and the ultimate rest found in Mashiach.",
        Some("🕊️"),
    ),
    FactRecord::from_static(
        "women-genealogy",
        Insight,
        "Matthew's genealogy of Yahusha unusually includes four women: Tamar, Rahab, Ruth, and Bathsheba - all Gentiles or associated with scandal, showing Elohiym's inclusive grace.",
        Some("👥"),
    ),
    FactRecord::from_static(
        "kings-chronicles",
        History,
        "1&2 Kings and 1&2 Chronicles cover the same historical period but from different perspectives: Kings emphasizes political history, Chronicles focuses on spiritual/priestly matters.",
        Some("📚"),
    ),
    FactRecord::from_static(
        "aramaic-daniel",
        Translation,
        "Daniel 2:4 through 7:28 is written in Aramaic because these chapters contain prophecies primarily concerning Gentile nations and were meant for a wider audience.",
        Some("🌐"),
    ),
    FactRecord::from_static(
        "isaiah-messiah",
        Insight,
        "Isaiah is called the \"Fifth Gospel\" because it contains more messianic prophecies than any other Old Testament book - at least 50 distinct prophecies about the Messiah.",
        Some("✝️"),
    ),
    FactRecord::from_static(
        "book-esther",
        Statistics,
        "The Book of Esther never explicitly mentions Elohiym or Yahuah, yet His providential hand is evident throughout, demonstrating His sovereignty even in apparent absence.",
        Some("👸"),
    ),
    FactRecord::from_static(
        "paul-conversion",
        History,
        "Saul's conversion on the Damascus road (Acts 9) is so significant it's recorded three times in Acts, emphasizing the power of encountering the risen Yahusha.",
        Some("⚡"),
    ),
    FactRecord::from_static(
        "temple-construction",
        Statistics,
        "Solomon's Temple took 7 years to build and used 183,000 workers. It stood for about 400 years before being destroyed by Babylon in 586 BC.",
        Some("⛪"),
    ),
    FactRecord::from_static(
        "mosaic-law",
        Statistics,
        "The Torah contains 613 commandments (mitzvot): 248 positive commands and 365 negative commands, covering all aspects of life and worship.",
        Some("⚖️"),
    ),
    FactRecord::from_static(
        "gospel-mark",
        Statistics,
        "The Gospel of Mark is the shortest and most action-packed Gospel, using the word \"immediately\" 42 times to emphasize the urgency of Yahusha's ministry.",
        Some("⚡"),
    ),
    FactRecord::from_static(
        "manna-provision",
        Insight,
        "Yahuah provided manna for Israel for 40 years in the wilderness - about 14,600 days. The manna stopped the day after they entered the Promised Land (Joshua 5:12).",
        Some("🍞"),
    ),
    FactRecord::from_static(
        "book-numbers",
        Statistics,
        "The Book of Numbers gets its name from the two censuses recorded (chapters 1 and 26), but its Hebrew name \"Bamidbar\" means \"In the Wilderness.\"",
        Some("🔢"),
    ),
    FactRecord::from_static(
        "covenant-rainbow",
        Insight,
        "The rainbow covenant with Noah (Genesis 9) was the first of several biblical covenants. Each divine covenant reveals more of Yahuah's redemptive plan.",
        Some("🌈"),
    ),
    FactRecord::from_static(
        "book-acts",
        Statistics,
        "The Book of Acts records the growth of the early church from 120 believers (Acts 1:15) to thousands across the Roman Empire in just 30 years.",
        Some("📈"),
    ),
    FactRecord::from_static(
        "genealogy-adam",
        Insight,
        "The names in the genealogy from Adam to Noah (Genesis 5) form a sentence in Hebrew: \"Man appointed mortal sorrow, the blessed Elohiym shall come down teaching, His death shall bring the despairing rest.\"",
        Some("📊"),
    ),
    FactRecord::from_static(
        "nehemiah-wall",
        Statistics,
        "Nehemiah rebuilt Jerusalem's walls in just 52 days (Nehemiah 6:15), a remarkable feat that demonstrated Yahuah's power and the people's dedication.",
        Some("🧱"),
    ),
    FactRecord::from_static(
        "greek-lxx",
        Translation,
        "The Septuagint (LXX) was translated by 70 Jewish scholars in Alexandria around 250 BC, making it the oldest translation of Hebrew Scripture.",
        Some("🏛️"),
    ),
    FactRecord::from_static(
        "zechariah-visions",
        Statistics,
        "The prophet Zechariah received 8 night visions in a single night (Zechariah 1-6), revealing Yahuah's plans for Israel's restoration and the coming Messiah.",
        Some("🌙"),
    ),
    FactRecord::from_static(
        "census-quirinius",
        History,
        "The census mentioned in Luke 2:1-2 that brought Joseph and Mary to Bethlehem has been archaeologically confirmed, validating the Gospel account.",
        Some("📋"),
    ),
    FactRecord::from_static(
        "paul-shipwreck",
        Statistics,
        "Paul was shipwrecked three times (2 Corinthians 11:25), with Acts 27 providing a detailed account of his final shipwreck journey to Rome.",
        Some("⚓"),
    ),
    FactRecord::from_static(
        "wilderness-40",
        Insight,
        "The number 40 appears frequently in Scripture: the flood lasted 40 days, Moses was on Sinai 40 days, Israel wandered 40 years, Yahusha fasted 40 days.",
        Some("4️⃣"),
    ),
    FactRecord::from_static(
        "jericho-walls",
        History,
        "Archaeological excavations at Jericho have found collapsed walls that fell outward (not inward as typical in sieges), consistent with the biblical account in Joshua 6.",
        Some("🏯"),
    ),
    FactRecord::from_static(
        "parable-count",
        Statistics,
        "Yahusha taught using about 40 parables recorded in the Gospels. Parables were a rabbinical teaching method that revealed truth to the open-hearted while concealing it from the proud.",
        Some("🌱"),
    ),
    FactRecord::from_static(
        "tabernacle-gold",
        Statistics,
        "The Tabernacle used about 1 ton of gold, 3.75 tons of silver, and 2.5 tons of bronze - representing over $40 million in today's value!",
        Some("⛺"),
    ),
    FactRecord::from_static(
        "passover-lamb",
        Insight,
        "The Passover lamb had to be without blemish and its bones couldn't be broken (Exodus 12:5,46), perfectly foreshadowing Yahusha, the Lamb of Elohiym (John 19:36).",
        Some("🐑"),
    ),
    FactRecord::from_static(
        "beatitudes-count",
        Statistics,
        "The Sermon on the Mount contains 9 Beatitudes (Matthew 5:3-11), each beginning with \"Blessed are\" and describing the character of kingdom citizens.",
        Some("⛰️"),
    ),
    FactRecord::from_static(
        "fish-multiplication",
        Insight,
        "Yahusha multiplied bread and fish twice: feeding 5,000 men (plus women and children) in Matthew 14, and 4,000 men in Matthew 15, demonstrating His power over creation.",
        Some("🐟"),
    ),
    FactRecord::from_static(
        "daniel-70-weeks",
        Insight,
        "Daniel's prophecy of the 70 weeks (Daniel 9:24-27) precisely predicted the timing of the Messiah's coming and crucifixion, written 500+ years beforehand.",
        Some("📅"),
    ),
    FactRecord::from_static(
        "book-jonah",
        Statistics,
        "Jonah is quoted or referenced 9 times in the New Testament. Yahusha Himself referenced Jonah's 3 days in the fish as a sign of His resurrection (Matthew 12:40).",
        Some("🐋"),
    ),
    FactRecord::from_static(
        "fruit-spirit",
        Statistics,
        "The fruit of the Ruach (Spirit) in Galatians 5:22-23 lists 9 characteristics: love, joy, peace, patience, kindness, goodness, faithfulness, gentleness, and self-control.",
        Some("🍇"),
    ),
    FactRecord::from_static(
        "armor-god",
        Insight,
        "The armor of Elohiym in Ephesians 6:14-17 has 6 pieces, but only one offensive weapon - the sword of the Ruach, which is the word of Elohiym.",
        Some("⚔️"),
    ),
    FactRecord::from_static(
        "wilderness-tabernacle",
        Statistics,
        "Detailed instructions for the Tabernacle appear in 50 chapters of the Bible (13 in Exodus alone), showing the importance of worship according to Yahuah's design.",
        Some("📐"),
    ),
    FactRecord::from_static(
        "babel-languages",
        History,
        "At the Tower of Babel, Yahuah confused human language (Genesis 11:9). At Pentecost, He reversed this by enabling the disciples to speak in many languages (Acts 2).",
        Some("🗼"),
    ),
    FactRecord::from_static(
        "high-priest-garments",
        Insight,
        "The high priest's breastplate had 12 precious stones representing the 12 tribes of Israel, worn over his heart, symbolizing that the priest carried the people before Yahuah.",
        Some("💎"),
    ),
    FactRecord::from_static(
        "paul-damascus",
        Statistics,
        "Paul spent about 3 years in Arabia after his Damascus road conversion (Galatians 1:17-18), likely studying Scripture in light of his encounter with Yahusha.",
        Some("🏜️"),
    ),
    FactRecord::from_static(
        "prophets-major-minor",
        Statistics,
        "The \"minor prophets\" aren't less important - they're shorter! Together, the 12 minor prophets (Hosea through Malachi) equal the length of Isaiah.",
        Some("📖"),
    ),
    FactRecord::from_static(
        "pentateuch-moses",
        History,
        "The first five books (Pentateuch/Torah) are traditionally attributed to Moses, who wrote about events spanning from creation (Genesis 1) to his own death (Deuteronomy 34).",
        Some("📜"),
    ),
    FactRecord::from_static(
        "gideon-army",
        Statistics,
        "Yahuah reduced Gideon's army from 32,000 to just 300 men (Judges 7:3-7) to ensure Israel knew the victory came from Him, not their own strength.",
        Some("🎺"),
    ),
    FactRecord::from_static(
        "chapter-verse",
        History,
        "The Bible wasn't originally divided into chapters and verses. Chapters were added in 1227 AD and verses in 1551 AD to make Scripture easier to reference.",
        Some("🔢"),
    ),
    FactRecord::from_static(
        "abraham-covenant",
        Insight,
        "Yahuah's covenant with Abraham involved cutting animals in half. When Yahuah alone passed through (Genesis 15:17), He was making an unconditional promise.",
        Some("🔥"),
    ),
    FactRecord::from_static(
        "melchizedek-mystery",
        Insight,
        "Melchizedek appears only twice in the Old Testament (Genesis 14, Psalm 110) but is extensively discussed in Hebrews 7 as a type of Yahusha's eternal priesthood.",
        Some("👑"),
    ),
    FactRecord::from_static(
        "jubilee-year",
        Insight,
        "The Year of Jubilee occurred every 50 years (Leviticus 25), when debts were forgiven and property returned - a beautiful picture of redemption and restoration.",
        Some("🎉"),
    ),
    FactRecord::from_static(
        "twelve-tribes",
        Statistics,
        "The 12 tribes of Israel are listed differently in various places because Levi (the priestly tribe) sometimes replaces Joseph, who was divided into Ephraim and Manasseh.",
        Some("🏕️"),
    ),
    FactRecord::from_static(
        "trinity-hints",
        Insight,
        "The word \"Elohiym\" is grammatically plural, and Yahuah refers to Himself as \"us\" (Genesis 1:26, 11:7), hinting at the triune nature revealed in the New Testament.",
        Some("🔺"),
    ),
    FactRecord::from_static(
        "golden-calf",
        History,
        "While Moses received the Ten Commandments on Mount Sinai, Israel made a golden calf (Exodus 32). Despite this sin, Yahuah's covenant mercy prevailed.",
        Some("🐮"),
    ),
    FactRecord::from_static(
        "cyprus-barnabas",
        History,
        "Barnabas was from Cyprus (Acts 4:36), and he and Paul later evangelized the island (Acts 13:4-12). Archaeological evidence confirms early Christian presence there.",
        Some("🏝️"),
    ),
    FactRecord::from_static(
        "book-lamentations",
        Statistics,
        "Lamentations has 5 chapters, with chapters 1-4 being acrostic poems based on the Hebrew alphabet. Chapter 3 is a triple acrostic with 66 verses.",
        Some("😢"),
    ),
    FactRecord::from_static(
        "greatest-commandment",
        Insight,
        "When asked about the greatest commandment, Yahusha quoted the Shema (Deuteronomy 6:4-5) and Leviticus 19:18, showing love for Elohiym and neighbor as Torah's foundation.",
        Some("💕"),
    ),
    FactRecord::from_static(
        "lord-prayer",
        Statistics,
        "The Lord's Prayer (Matthew 6:9-13) contains just 66 words in Greek and addresses 7 key petitions, serving as a model for all prayer.",
        Some("🙏"),
    ),
    FactRecord::from_static(
        "seventy-elders",
        Statistics,
        "Moses appointed 70 elders to help lead Israel (Numbers 11:16). Later, Yahusha sent out 70 disciples (Luke 10:1), echoing this leadership structure.",
        Some("👥"),
    ),
    FactRecord::from_static(
        "sarah-age",
        Statistics,
        "Sarah was 90 years old when she gave birth to Isaac (Genesis 17:17), demonstrating that nothing is impossible with Yahuah.",
        Some("👶"),
    ),
    FactRecord::from_static(
        "david-psalms",
        Statistics,
        "Of the 150 Psalms, 73 are attributed to David. The Psalms cover every human emotion and circumstance, making them timeless expressions of worship and prayer.",
        Some("🎵"),
    ),
    FactRecord::from_static(
        "tax-collectors",
        Insight,
        "Matthew (also called Levi) was a tax collector - despised by Jews for working with Rome. His inclusion as a disciple showed Yahusha's heart for outcasts.",
        Some("💰"),
    ),
    FactRecord::from_static(
        "vine-branches",
        Insight,
        "In John 15:5, Yahusha calls Himself the vine and believers the branches. This imagery comes from Isaiah 5 and Psalm 80, which describe Israel as Yahuah's vineyard.",
        Some("🍇"),
    ),
    FactRecord::from_static(
        "bronze-sea",
        Statistics,
        "The bronze sea in Solomon's temple held about 11,500 gallons of water (1 Kings 7:26), used for priestly washings, symbolizing spiritual cleansing.",
        Some("🌊"),
    ),
    FactRecord::from_static(
        "emmaus-road",
        Insight,
        "On the Emmaus road, the risen Yahusha explained how all Scripture pointed to Him (Luke 24:27), showing the Old Testament is fundamentally about the Messiah.",
        Some("🚶"),
    ),
    FactRecord::from_static(
        "sinai-commandments",
        Statistics,
        "Yahuah gave the Ten Commandments twice: first on stone tablets Moses broke (Exodus 32:19), then on replacement tablets stored in the Ark (Exodus 34:1-28).",
        Some("📜"),
    ),
    FactRecord::from_static(
        "woman-well",
        Insight,
        "The Samaritan woman at the well (John 4) had been married 5 times. Yahusha's conversation with her broke three social barriers: gender, ethnicity, and moral status.",
        Some("💧"),
    ),
    FactRecord::from_static(
        "holy-holy-holy",
        Insight,
        "Only one attribute of Elohiym is repeated three times in Scripture: \"Holy, Holy, Holy\" (Isaiah 6:3, Revelation 4:8), emphasizing His absolute purity and transcendence.",
        Some("✨"),
    ),
    FactRecord::from_static(
        "babel-seventy",
        History,
        "Genesis 10 lists 70 nations descended from Noah. Jewish tradition says 70 languages came from Babel, which is why Moses appointed 70 elders and Yahusha sent 70 disciples.",
        Some("🌍"),
    ),
    FactRecord::from_static(
        "book-philippians",
        Statistics,
        "Paul wrote Philippians from prison (likely in Rome), yet uses the words \"joy\" and \"rejoice\" 16 times, making it the most joyful of his prison epistles.",
        Some("😊"),
    ),
    FactRecord::from_static(
        "burning-bush",
        Insight,
        "At the burning bush, Yahuah revealed His name \"I AM\" (Exodus 3:14). Later, Yahusha used \"I AM\" 7 times in John's Gospel, claiming divine identity.",
        Some("🔥"),
    ),
    FactRecord::from_static(
        "urim-thummim",
        History,
        "The Urim and Thummim were objects used by the high priest to discern Yahuah's will (Exodus 28:30). Their exact nature remains a mystery.",
        Some("🎲"),
    ),
    FactRecord::from_static(
        "forty-two-generations",
        Statistics,
        "Matthew arranges Yahusha's genealogy into three sets of 14 generations (Matthew 1:17), creating a structured pattern from Abraham to Mashiach.",
        Some("🌳"),
    ),
    FactRecord::from_static(
        "song-moses",
        Statistics,
        "Moses wrote two songs recorded in Scripture: Exodus 15 (after the Red Sea crossing) and Deuteronomy 32 (his farewell song), both celebrating Yahuah's faithfulness.",
        Some("🎶"),
    ),
    FactRecord::from_static(
        "remnant-theology",
        Insight,
        "Throughout Scripture, Yahuah preserves a faithful remnant: 8 in Noah's ark, 7,000 in Elijah's time (1 Kings 19:18), and a remnant in Paul's day (Romans 11:5).",
        Some("🌾"),
    ),
    FactRecord::from_static(
        "synagogue-origin",
        History,
        "Synagogues developed during the Babylonian exile when the Temple was destroyed, providing local places for Scripture reading and prayer.",
        Some("🕍"),
    ),
    FactRecord::from_static(
        "lots-purim",
        History,
        "The Jewish festival of Purim celebrates Esther's deliverance. \"Purim\" means \"lots,\" referring to Haman's casting lots to determine when to destroy the Jews (Esther 3:7).",
        Some("🎭"),
    ),
    FactRecord::from_static(
        "paul-tentmaker",
        History,
        "Paul was a tentmaker by trade (Acts 18:3). He often supported himself while preaching, refusing payment to avoid being a burden to new churches.",
        Some("⛺"),
    ),
    FactRecord::from_static(
        "magi-gifts",
        Insight,
        "The magi's three gifts had symbolic meaning: gold for royalty, frankincense for deity, and myrrh for burial - prophetically declaring who Yahusha was and what He would do.",
        Some("🎁"),
    ),
    FactRecord::from_static(
        "seven-churches",
        Statistics,
        "Revelation addresses 7 churches in Asia Minor (Revelation 2-3). These were real historical churches but also represent different conditions in churches throughout history.",
        Some("🏛️"),
    ),
    FactRecord::from_static(
        "david-goliath",
        Statistics,
        "Goliath was over 9 feet tall (1 Samuel 17:4). David chose 5 smooth stones for his sling - some believe because Goliath had 4 brothers (2 Samuel 21:22).",
        Some("🗿"),
    ),
    FactRecord::from_static(
        "leviticus-love",
        Insight,
        "While Leviticus is known for laws, it also contains \"Love your neighbor as yourself\" (Leviticus 19:18), which Yahusha called one of the two greatest commandments.",
        Some("❤️"),
    ),
    FactRecord::from_static(
        "mount-transfiguration",
        Insight,
        "At the Transfiguration, Moses (representing the Law) and Elijah (representing the Prophets) appeared with Yahusha, showing He fulfills all Scripture (Matthew 17:3).",
        Some("⛰️"),
    ),
    FactRecord::from_static(
        "pentecost-harvest",
        Insight,
        "Pentecost (Shavuot) was a harvest festival. The Ruach came on Pentecost (Acts 2) initiating the great harvest of souls, with 3,000 saved that first day.",
        Some("🌾"),
    ),
    FactRecord::from_static(
        "feast-tabernacles",
        Insight,
        "During the Feast of Tabernacles, when water was poured out, Yahusha declared \"If anyone thirsts, let him come to Me and drink\" (John 7:37-38).",
        Some("💦"),
    ),
    FactRecord::from_static(
        "cornelius-gentiles",
        History,
        "Cornelius (Acts 10) was the first Gentile convert, marking a pivotal moment when the Gospel officially extended beyond Jewish boundaries.",
        Some("🚪"),
    ),
    FactRecord::from_static(
        "sodom-gomorrah",
        History,
        "Archaeological evidence suggests the cities of Sodom and Gomorrah were located near the Dead Sea and were destroyed by a natural disaster around 1900 BC, consistent with Genesis 19.",
        Some("🔥"),
    ),
    FactRecord::from_static(
        "good-samaritan",
        Insight,
        "The Good Samaritan parable (Luke 10:25-37) was shocking because Samaritans were despised by Jews. Yahusha used it to redefine \"neighbor\" beyond ethnic boundaries.",
        Some("🤝"),
    ),
    FactRecord::from_static(
        "scribes-sopherim",
        History,
        "The Sopherim (Jewish scribes) counted every letter of Scripture when copying. The middle letter of the Torah is the \"vav\" in Leviticus 11:42.",
        Some("✍️"),
    ),
    FactRecord::from_static(
        "seven-sayings",
        Statistics,
        "Yahusha spoke seven sayings from the cross, each fulfilling prophecy and revealing His mission: forgiveness, salvation, relationship, suffering, thirst, completion, and trust.",
        Some("✝️"),
    ),
    FactRecord::from_static(
        "sanhedrin-council",
        History,
        "The Sanhedrin was the Jewish supreme court with 70 members (plus the high priest). They tried Yahusha but lacked authority to execute, requiring Roman approval.",
        Some("⚖️"),
    ),
    FactRecord::from_static(
        "mary-magdalene",
        Insight,
        "Mary Magdalene was the first witness of the resurrection (John 20:11-18). In a culture where women's testimony wasn't valued, Yahusha chose her to proclaim His victory.",
        Some("🌅"),
    ),
    FactRecord::from_static(
        "book-ruth",
        Insight,
        "Ruth, a Moabite convert, became the great-grandmother of King David and is in Yahusha's genealogy (Matthew 1:5), showing Gentiles were always part of Yahuah's plan.",
        Some("💝"),
    ),
    FactRecord::from_static(
        "thessalonians-first",
        History,
        "1 Thessalonians, written around 50 AD, is likely Paul's earliest epistle and thus possibly the first book of the New Testament to be written.",
        Some("📮"),
    ),
    FactRecord::from_static(
        "john-beloved",
        Insight,
        "John referred to himself as \"the disciple whom Yahusha loved\" five times, not from pride but from wonder that the Son of Elohiym would love him.",
        Some("💙"),
    ),
    FactRecord::from_static(
        "talents-parable",
        Insight,
        "In the parable of the talents (Matthew 25:14-30), a talent was worth about 20 years of wages - roughly $1 million today. The parable emphasizes faithful stewardship.",
        Some("💎"),
    ),
    FactRecord::from_static(
        "balaam-donkey",
        Insight,
        "Balaam's donkey spoke (Numbers 22:28-30), one of only two animals in Scripture to talk (the other being the serpent in Eden), showing Yahuah can use anything.",
        Some("🐴"),
    ),
    FactRecord::from_static(
        "faith-hebrews",
        Statistics,
        "Hebrews 11, the \"Hall of Faith,\" mentions 16 Old Testament heroes by name, demonstrating that faith has always been the path to righteousness.",
        Some("🏆"),
    ),
    FactRecord::from_static(
        "book-haggai",
        Statistics,
        "Haggai is one of the shortest prophetic books with only 2 chapters, but it motivated the Jews to complete rebuilding the Temple in 516 BC.",
        Some("🏗️"),
    ),
    FactRecord::from_static(
        "isaac-sacrifice",
        Insight,
        "Abraham's near-sacrifice of Isaac (Genesis 22) occurred on Mount Moriah, the same location where Solomon later built the Temple - and where Yahusha was crucified.",
        Some("🏔️"),
    ),
    FactRecord::from_static(
        "shepherd-psalm",
        Insight,
        "Psalm 23, the Shepherd Psalm, perfectly mirrors the Hebrew shepherd's day: morning pasture (v1-2), midday water (v2), evening return (v3-4), night protection (v5-6).",
        Some("🐑"),
    ),
    FactRecord::from_static(
        "lot-wife",
        Insight,
        "Lot's wife looked back at Sodom and became a pillar of salt (Genesis 19:26). Yahusha used her as a warning: \"Remember Lot's wife\" (Luke 17:32).",
        Some("🧂"),
    ),
    FactRecord::from_static(
        "census-david",
        History,
        "David's unauthorized census (2 Samuel 24) was taken on the threshing floor of Araunah - the site that became the Temple mount, where mercy met judgment.",
        Some("📊"),
    ),
    FactRecord::from_static(
        "seamless-robe",
        Insight,
        "Yahusha's seamless robe (John 19:23) was woven from top to bottom, similar to the high priest's garment, indicating His high priestly role.",
        Some("👔"),
    ),
    FactRecord::from_static(
        "ravens-elijah",
        Insight,
        "Yahuah sent ravens to feed Elijah (1 Kings 17:4). Ravens are unclean birds and scavengers, yet Yahuah used them to sustain His prophet.",
        Some("🦅"),
    ),
    FactRecord::from_static(
        "fish-coin",
        Insight,
        "When tax collectors asked Peter about the Temple tax, Yahusha sent him to catch a fish with a coin in its mouth (Matthew 17:27) - showing His sovereignty over creation.",
        Some("🐟"),
    ),
    FactRecord::from_static(
        "caleb-faithful",
        Statistics,
        "Caleb was 40 when he spied out Canaan, wandered 40 years, and at 85 said \"I am as strong today as I was then\" (Joshua 14:10-11) - rewarded for faithfulness.",
        Some("💪"),
    ),
    FactRecord::from_static(
        "love-chapter",
        Insight,
        "1 Corinthians 13, the \"Love Chapter,\" defines love with 15 characteristics. Without love, even the greatest spiritual gifts are meaningless.",
        Some("💕"),
    ),
    FactRecord::from_static(
        "nicodemus-night",
        Insight,
        "Nicodemus came to Yahusha \"by night\" (John 3:2), possibly from fear but symbolic of his spiritual darkness. Later he boldly defended Yahusha (John 7:50-51).",
        Some("🌙"),
    ),
    FactRecord::from_static(
        "widow-mite",
        Insight,
        "The widow gave two mites (Mark 12:42), worth about 1/64 of a day's wage. Yahusha said she gave more than the rich because she gave everything.",
        Some("🪙"),
    ),
    FactRecord::from_static(
        "solomons-wisdom",
        Statistics,
        "Solomon spoke 3,000 proverbs and wrote 1,005 songs (1 Kings 4:32). He wrote Proverbs, Ecclesiastes, and Song of Solomon, plus Psalms 72 and 127.",
        Some("👑"),
    ),
    FactRecord::from_static(
        "valley-bones",
        Insight,
        "Ezekiel's vision of dry bones (Ezekiel 37) prophesied Israel's restoration. The bones came together, received flesh, then breath - body, soul, spirit.",
        Some("🦴"),
    ),
    FactRecord::from_static(
        "handwriting-wall",
        Insight,
        "The \"handwriting on the wall\" (Daniel 5:5) appeared during Belshazzar's feast. \"Mene, Mene, Tekel, Upharsin\" predicted Babylon's fall that very night.",
        Some("✋"),
    ),
    FactRecord::from_static(
        "doubting-thomas",
        Insight,
        "Thomas doubted the resurrection but made the greatest confession: \"My Master and my Elohiym!\" (John 20:28), explicitly declaring Yahusha's deity.",
        Some("🤲"),
    ),
    FactRecord::from_static(
        "priscilla-aquila",
        Insight,
        "Priscilla and Aquila are always mentioned together in Acts and Paul's letters, modeling a godly partnership in marriage and ministry.",
        Some("👫"),
    ),
    FactRecord::from_static(
        "nehemiah-cupbearer",
        History,
        "Nehemiah was cupbearer to King Artaxerxes, a highly trusted position. His access to the king enabled him to rebuild Jerusalem's walls.",
        Some("🍷"),
    ),
    FactRecord::from_static(
        "alabaster-box",
        Insight,
        "The woman who anointed Yahusha with costly perfume (Mark 14:3) broke the alabaster box - she couldn't reuse it, symbolizing total surrender.",
        Some("💐"),
    ),
    FactRecord::from_static(
        "year-release",
        Insight,
        "Every seventh year was a Sabbath year when debts were canceled and land rested (Deuteronomy 15:1-2), teaching dependence on Yahuah's provision.",
        Some("7️⃣"),
    ),
    FactRecord::from_static(
        "stephens-sermon",
        Statistics,
        "Stephen's defense before the Sanhedrin (Acts 7) is the longest recorded sermon in Acts, recounting Israel's history before declaring them resistant to the Ruach.",
        Some("📢"),
    ),
    FactRecord::from_static(
        "book-malachi",
        History,
        "Malachi, the last Old Testament book, was written around 430 BC. Then 400 years of prophetic silence followed before John the Baptist.",
        Some("🔕"),
    ),
    FactRecord::from_static(
        "wrestling-jacob",
        Insight,
        "Jacob wrestled with Elohiym all night (Genesis 32:24-30) and was renamed Israel (\"struggles with Elohiym\"), receiving a limp that made him depend on Yahuah.",
        Some("🤼"),
    ),
    FactRecord::from_static(
        "nazareth-despised",
        Insight,
        "Nathanael asked \"Can anything good come from Nazareth?\" (John 1:46). Nazareth was insignificant, yet Yahusha being from there fulfilled prophecy (Matthew 2:23).",
        Some("🏘️"),
    ),
    FactRecord::from_static(
        "red-sea-crossing",
        Statistics,
        "Some scholars estimate 2-3 million Israelites crossed the Red Sea. The crossing likely took most of the night, requiring a path about 3-4 miles wide.",
        Some("🌊"),
    ),
    FactRecord::from_static(
        "peter-keys",
        Insight,
        "Yahusha gave Peter \"the keys of the kingdom\" (Matthew 16:19). Peter used them to open the Gospel to Jews (Acts 2), Samaritans (Acts 8), and Gentiles (Acts 10).",
        Some("🔑"),
    ),
    FactRecord::from_static(
        "rock-water",
        Insight,
        "Moses struck the rock twice for water (Numbers 20:11). Paul says the rock was Mashiach (1 Corinthians 10:4) - struck once at Calvary, never to be struck again.",
        Some("⛰️"),
    ),
    FactRecord::from_static(
        "cities-refuge",
        Insight,
        "The 6 cities of refuge (Numbers 35) provided asylum for accidental killers, picturing how we flee to Mashiach for refuge from judgment.",
        Some("🏰"),
    ),
    FactRecord::from_static(
        "shulamite-bride",
        Insight,
        "Song of Solomon portrays the love between bride and groom. Historically interpreted as picturing Mashiach's love for His bride, the church.",
        Some("💑"),
    ),
    FactRecord::from_static(
        "cloud-pillar",
        Insight,
        "The pillar of cloud by day and fire by night (Exodus 13:21) led Israel for 40 years, never leaving them - a constant visible reminder of Yahuah's presence.",
        Some("☁️"),
    ),
    FactRecord::from_static(
        "zacchaeus-tree",
        Insight,
        "Zacchaeus, a chief tax collector, climbed a sycamore tree to see Yahusha (Luke 19:1-10). After meeting Yahusha, he gave half his goods to the poor.",
        Some("🌳"),
    ),
    FactRecord::from_static(
        "handwriting-paul",
        Statistics,
        "Paul typically dictated his letters but added personal greetings in his own handwriting (Galatians 6:11). He may have had poor eyesight.",
        Some("✉️"),
    ),
    FactRecord::from_static(
        "halleluyah-meaning",
        Names,
        "The phrase \"HalleluYAH\" literally means \"Praise YAH\", not \"praise the LORD.\" Every time you say it, you're shouting His true Name.",
        Some("🎺"),
    ),
    FactRecord::from_static(
        "letter-j-history",
        History,
        "The letter J didn't exist until around 1524 A.D. — so names like \"Jesus\" and \"Jehovah\" didn't exist in the Messiah's lifetime.",
        Some("📝"),
    ),
    FactRecord::from_static(
        "yahusha-meaning-detailed",
        Names,
        "The Messiah's real Name is YAHUSHA, meaning \"YAHUAH saves.\" His very Name carries the Father's power.",
        Some("⚡"),
    ),
    FactRecord::from_static(
        "god-title",
        Names,
        "The word \"God\" is a title, not a name. In ancient times it was used for many deities — which is why YAHUAH said, \"Have no other elohim before Me.\"",
        Some("👑"),
    ),
    FactRecord::from_static(
        "lord-baal",
        Translation,
        "The word \"Lord\" traces back to \"Baal\", meaning \"master\". The prophets warned Israel not to mix those names (Hosea 2:16-17).",
        Some("⚠️"),
    ),
    FactRecord::from_static(
        "natsarim-believers",
        History,
        "Early believers weren't called \"Christians\" — they were known as Natsarim or Followers of the Way, meaning guardians or watchmen of the truth.",
        Some("👁️"),
    ),
    FactRecord::from_static(
        "church-origin",
        Translation,
        "The word \"church\" never appeared in the original Hebrew or Greek texts. It came later from \"circe\", a pagan root linked to sun worship.",
        Some("☀️"),
    ),
    FactRecord::from_static(
        "tanakh-structure",
        Translation,
        "The Hebrew Scriptures are called the Tanakh — Torah (Law), Nevi'im (Prophets), and Ketuvim (Writings).",
        Some("📚"),
    ),
    FactRecord::from_static(
        "renewed-covenant",
        Insight,
        "The so-called \"New Testament\" is actually the Renewed Covenant (Brit Chadashah), built on obedience and faith.",
        Some("📜"),
    ),
    FactRecord::from_static(
        "biblical-year",
        History,
        "YAHUAH's biblical year starts in spring (Abib/Nisan), not in January.",
        Some("🌸"),
    ),
    FactRecord::from_static(
        "sabbath-change",
        History,
        "The Sabbath was never changed to Sunday by YAHUAH or YAHUSHA — Rome made that change for political control (Daniel 7:25).",
        Some("📅"),
    ),
    FactRecord::from_static(
        "yahusha-torah",
        Insight,
        "When YAHUSHA fasted forty days, He quoted Deuteronomy, proving the Torah still stands.",
        Some("📖"),
    ),
    FactRecord::from_static(
        "home-gatherings",
        History,
        "The first followers of YAHUSHA gathered in homes, not temples built by empire.",
        Some("🏠"),
    ),
    FactRecord::from_static(
        "yahu-names",
        Names,
        "Names ending in \"-Yahu\" (like Eliyahu or Yirmeyahu) carry YAHUAH's Name — His mark on His people.",
        Some("✨"),
    ),
    FactRecord::from_static(
        "israel-gathering",
        Insight,
        "YAHUAH scattered Israel for disobedience but promised to gather them again — that gathering is happening now.",
        Some("🌍"),
    ),
    FactRecord::from_static(
        "malakiym-messengers",
        Translation,
        "Angels in Hebrew are malakiym, meaning \"messengers\" — function, not wings.",
        Some("📨"),
    ),
    FactRecord::from_static(
        "book-enoch",
        History,
        "The book of Enoch was quoted by Jude, showing it was respected long before it was banned.",
        Some("📕"),
    ),
    FactRecord::from_static(
        "december-25",
        History,
        "YAHUSHA wasn't born on December 25th — that date celebrated pagan sun gods.",
        Some("🎄"),
    ),
    FactRecord::from_static(
        "amen-meaning",
        Translation,
        "Amen comes from the Hebrew \"Aman\", meaning \"so be it\" — not from Egypt's Amun-Ra.",
        Some("🙌"),
    ),
    FactRecord::from_static(
        "yahudah-praise",
        Names,
        "The tribe of Yahudah (Judah) carries the Name YAH — that's why praise begins with Judah.",
        Some("🎶"),
    ),
    FactRecord::from_static(
        "israel-identity",
        Names,
        "Israel/Yashar'el means \"He who strives with EL\" — it's a covenant identity, not a political nation.",
        Some("🛡️"),
    ),
    FactRecord::from_static(
        "feasts-eternal",
        Insight,
        "The Feasts of YAHUAH (Leviticus 23) are eternal appointments — not \"Jewish holidays.\"",
        Some("📆"),
    ),
    FactRecord::from_static(
        "passover-yahusha",
        Insight,
        "Passover pointed to YAHUSHA, the spotless Lamb whose blood delivers.",
        Some("🐑"),
    ),
    FactRecord::from_static(
        "ruach-haqodesh",
        Names,
        "The RUACH HAQODESH means \"Set-Apart Spirit\", not a separate person.",
        Some("🕊️"),
    ),
    FactRecord::from_static(
        "bible-byblos",
        Translation,
        "Bible comes from Byblos, a pagan city tied to sun worship. Scripture calls itself \"the Word of YAHUAH.\"",
        Some("📜"),
    ),
    FactRecord::from_static(
        "twelve-tribes-scattered",
        Insight,
        "The twelve tribes of Israel were melanated people scattered worldwide — prophecy fulfilled (Deut 28).",
        Some("🌍"),
    ),
    FactRecord::from_static(
        "it-is-finished",
        Insight,
        "When YAHUSHA said, \"It is finished,\" He completed prophecy, not abolished Torah.",
        Some("✝️"),
    ),
    FactRecord::from_static(
        "early-symbols",
        History,
        "Early believers used symbols like the Menorah and Aleph & Tav, not the cross.",
        Some("🕎"),
    ),
    FactRecord::from_static(
        "emunah-faith",
        Translation,
        "Hebrew \"Emunah\" (faith) means \"active trust\" — belief proven by action.",
        Some("💪"),
    ),
    FactRecord::from_static(
        "sacred-name",
        History,
        "Ancient scrolls had no vowels; the Name YAHUAH was sacred and spoken with reverence.",
        Some("📜"),
    ),
    FactRecord::from_static(
        "israel-captivities",
        History,
        "Israel's captivities — Egypt, Assyria, Babylon, Rome — fulfill the curses of Deuteronomy 28.",
        Some("⛓️"),
    ),
    FactRecord::from_static(
        "prophets-repentance",
        Insight,
        "Prophets preached repentance, not prosperity.",
        Some("📢"),
    ),
    FactRecord::from_static(
        "teshuvah-return",
        Translation,
        "Teshuvah means \"return\" — repentance is going back to YAH's ways, not just saying sorry.",
        Some("🔄"),
    ),
    FactRecord::from_static(
        "yahusha-pharisees",
        Insight,
        "YAHUSHA rebuked the Pharisees for man-made laws that hid Torah's true heart — mercy, justice, faithfulness.",
        Some("⚖️"),
    ),
    FactRecord::from_static(
        "ethiopian-preservation",
        History,
        "Ancient Ethiopian believers preserved Hebrew texts long before Europe translated them.",
        Some("🇪🇹"),
    ),
    FactRecord::from_static(
        "holy-land-righteousness",
        Insight,
        "The \"Holy Land\" was meant for righteousness, not tourism.",
        Some("🏞️"),
    ),
    FactRecord::from_static(
        "qodesh-set-apart",
        Names,
        "YAHUAH calls His people Qodesh (Set-Apart) — not religious.",
        Some("✨"),
    ),
    FactRecord::from_static(
        "aleph-tav",
        Insight,
        "Hebrew begins with Aleph and ends with Tav — the same letters YAHUSHA used to describe Himself.",
        Some("🔤"),
    ),
    FactRecord::from_static(
        "feasts-foreshadow",
        Insight,
        "Each Feast of YAHUAH foreshadows YAHUSHA's mission — Passover (sacrifice), Unleavened Bread (sinless life), Firstfruits (resurrection), Shavuot (Spirit).",
        Some("🎭"),
    ),
    FactRecord::from_static(
        "tzitziyot-fringes",
        Insight,
        "YAHUAH commanded tzitziyot (fringes) to remind His people of obedience (Numbers 15:38).",
        Some("🧵"),
    ),
    FactRecord::from_static(
        "lunar-calendar",
        History,
        "Israel followed a lunar calendar, not Rome's solar one.",
        Some("🌙"),
    ),
    FactRecord::from_static(
        "israelite-bloodline",
        Insight,
        "Israelite is a bloodline and covenant, not a denomination.",
        Some("🩸"),
    ),
    FactRecord::from_static(
        "ruach-understanding",
        Insight,
        "The RUACH gives understanding — truth over emotion.",
        Some("💡"),
    ),
    FactRecord::from_static(
        "ten-commandments-eternal",
        Insight,
        "The Ten Commandments are ten eternal principles, not ten suggestions.",
        Some("📜"),
    ),
    FactRecord::from_static(
        "veil-torn",
        Insight,
        "When the temple veil tore, it meant access, not abolishment of obedience.",
        Some("⛪"),
    ),
    FactRecord::from_static(
        "hebrew-culture",
        History,
        "Hebrew culture was rooted in family, covenant, and community, not religion.",
        Some("👨‍👩‍👧‍👦"),
    ),
    FactRecord::from_static(
        "mark-obedience",
        Insight,
        "The real mark of YAHUAH is obedience, not technology.",
        Some("✅"),
    ),
    FactRecord::from_static(
        "mount-tsiyon",
        Insight,
        "YAHUSHA will reign from Mount Tsiyon (Zion) — not Rome or Washington.",
        Some("⛰️"),
    ),
    FactRecord::from_static(
        "speaking-name",
        Insight,
        "Speaking the Name YAHUAH connects you with every prophet, psalmist, and righteous soul who ever walked this earth.",
        Some("🗣️"),
    ),
    FactRecord::from_static(
        "hebrew-crossed-over",
        Translation,
        "The word \"Hebrew\" (Ivri) means \"one who crossed over\" — symbolizing leaving the world's system to walk in YAHUAH's covenant.",
        Some("🌊"),
    ),
    FactRecord::from_static(
        "first-hebrew",
        History,
        "The first person called a Hebrew was Abram (Abraham), after he crossed the river into obedience. (Genesis 14:13)",
        Some("🚶"),
    ),
    FactRecord::from_static(
        "adam-red-earth",
        Translation,
        "The name \"Adam\" in Hebrew means \"red earth\" — hinting at the rich, melanated tone of the first man.",
        Some("🌍"),
    ),
    FactRecord::from_static(
        "eve-chawwah",
        Names,
        "Eve's original Hebrew name is Chawwah (חוה), meaning \"life giver.\"",
        Some("💝"),
    ),
    FactRecord::from_static(
        "serpent-nachash",
        Translation,
        "The serpent in Eden didn't appear as a snake — the Hebrew word \"nachash\" means \"shining one\" or \"enchanter.\"",
        Some("✨"),
    ),
    FactRecord::from_static(
        "cain-abel-offering",
        Insight,
        "Cain and Abel's offering story is about obedience over effort — one gave what he wanted, the other what YAHUAH required.",
        Some("🔥"),
    ),
    FactRecord::from_static(
        "noah-ark-salvation",
        Insight,
        "Noah's Ark wasn't just a boat — it was a prophetic symbol of salvation through obedience.",
        Some("⛵"),
    ),
    FactRecord::from_static(
        "rainbow-covenant",
        Insight,
        "The rainbow is YAHUAH's covenant sign, not a modern identity flag.",
        Some("🌈"),
    ),
    FactRecord::from_static(
        "babel-authority",
        Insight,
        "Tower of Babel wasn't about height — it was about humans trying to reach the heavens without YAHUAH's authority.",
        Some("🗼"),
    ),
    FactRecord::from_static(
        "abraham-faith-first",
        Insight,
        "Abraham's covenant was sealed before circumcision — faith came first, then obedience followed. (Genesis 15–17)",
        Some("✡️"),
    ),
    FactRecord::from_static(
        "promised-land-extent",
        History,
        "The land promised to Abraham stretched far beyond modern Israel — from the Nile to the Euphrates.",
        Some("🗺️"),
    ),
    FactRecord::from_static(
        "jacob-yisrael",
        Names,
        "Jacob's name was changed to Yisra'el after wrestling with an angel — meaning \"one who prevails with Elohim.\"",
        Some("🤼"),
    ),
    FactRecord::from_static(
        "exodus-wealth",
        History,
        "The Israelites left Egypt with gold, silver, and livestock — YAHUAH made sure they didn't leave empty-handed.",
        Some("💰"),
    ),
    FactRecord::from_static(
        "moses-drawn-out",
        Names,
        "Moses' name means \"drawn out\" — prophetic of YAHUSHA drawing us out from sin and slavery.",
        Some("🌊"),
    ),
    FactRecord::from_static(
        "plagues-judgment",
        Insight,
        "The Ten Plagues were direct judgments against Egypt's false gods — each one dismantled a different idol.",
        Some("⚡"),
    ),
    FactRecord::from_static(
        "passover-protection",
        Translation,
        "Passover (Pesach) means \"to protect or pass over\" — it's a story of covering under covenant blood.",
        Some("🩸"),
    ),
    FactRecord::from_static(
        "red-sea-location",
        History,
        "The Red Sea crossing happened near the Gulf of Aqaba, not the Suez — evidence still sits under the waters.",
        Some("🌊"),
    ),
    FactRecord::from_static(
        "manna-what-is-it",
        Translation,
        "Manna literally means \"What is it?\" — YAHUAH fed Israel daily with supernatural provision.",
        Some("🍞"),
    ),
    FactRecord::from_static(
        "cloud-fire-presence",
        Insight,
        "YAHUAH's cloud by day and fire by night were physical manifestations of His presence — not just symbols.",
        Some("☁️"),
    ),
    FactRecord::from_static(
        "tabernacle-throne",
        Insight,
        "The Tabernacle was a portable throne room — a pattern of heavenly order shown to Moses on the mountain.",
        Some("⛺"),
    ),
    FactRecord::from_static(
        "ark-contents",
        Insight,
        "The Ark of the Covenant contained the Tablets, Aaron's Rod, and Manna — Law, Leadership, and Provision.",
        Some("📦"),
    ),
    FactRecord::from_static(
        "yom-kippur-entry",
        History,
        "The High Priest entered the Most Qodesh Place only once a year — on Yom Kippur (Day of Atonement).",
        Some("🕊️"),
    ),
    FactRecord::from_static(
        "shofar-warfare",
        Insight,
        "The shofar (ram's horn) represents spiritual warfare — when blown, it releases divine alert and breakthrough.",
        Some("🎺"),
    ),
    FactRecord::from_static(
        "levites-portion",
        Insight,
        "The Levites had no land inheritance — YAHUAH Himself was their portion. (Numbers 18:20)",
        Some("👨‍⚖️"),
    ),
    FactRecord::from_static(
        "david-three-anointings",
        History,
        "David was anointed three times — once privately, once publicly, once as king over all Israel.",
        Some("👑"),
    ),
    FactRecord::from_static(
        "solomon-wisdom-loyalty",
        Insight,
        "Solomon's wisdom came through YAHUAH's Spirit — but his downfall came from divided loyalty.",
        Some("💔"),
    ),
    FactRecord::from_static(
        "psalms-worship-album",
        Insight,
        "The Psalms were songs — the first Hebrew worship album written in pain, repentance, and victory.",
        Some("🎵"),
    ),
    FactRecord::from_static(
        "proverbs-kingdom-codes",
        Insight,
        "Proverbs are not mere advice — they are divine codes for kingdom living.",
        Some("💎"),
    ),
    FactRecord::from_static(
        "prophets-function",
        Insight,
        "The prophets didn't just predict — they warned, corrected, and called the people back to Torah.",
        Some("📣"),
    ),
    FactRecord::from_static(
        "isaiah-name-meaning",
        Names,
        "Isaiah's name means \"YAH is salvation\" — he prophesied YAHUSHA's virgin birth 700 years in advance.",
        Some("👶"),
    ),
    FactRecord::from_static(
        "jeremiah-teen-prophet",
        Insight,
        "Jeremiah was called as a teen — proof that age doesn't limit assignment.",
        Some("👦"),
    ),
    FactRecord::from_static(
        "ezekiel-visions",
        Insight,
        "Ezekiel's visions describe heavenly technology and spiritual dimensions unseen by man.",
        Some("👁️"),
    ),
    FactRecord::from_static(
        "daniel-torah-babylon",
        Insight,
        "Daniel kept Torah in Babylon — showing we can live set apart even in captivity.",
        Some("🦁"),
    ),
    FactRecord::from_static(
        "three-boys-names",
        Names,
        "The three Hebrew boys' real names — Hananyah, Mishael, and Azaryahu — all include YAH's Name.",
        Some("🔥"),
    ),
    FactRecord::from_static(
        "jonah-dove",
        Names,
        "Jonah's name means \"dove\" — and his story mirrors Israel's rebellion and restoration.",
        Some("🕊️"),
    ),
    FactRecord::from_static(
        "job-before-moses",
        History,
        "Job (Iyov) lived before Moses — proving righteousness existed before written Torah.",
        Some("📜"),
    ),
    FactRecord::from_static(
        "gospel-besorah",
        Translation,
        "The word \"gospel\" (besorah) means \"good news\" — the restoration of covenant between YAHUAH and His people.",
        Some("📰"),
    ),
    FactRecord::from_static(
        "gospels-prophecy",
        Insight,
        "Matthew, Mark, Luke, and John weren't writing religion — they were recording fulfilled prophecy.",
        Some("📖"),
    ),
    FactRecord::from_static(
        "mary-miryam",
        Names,
        "Mary's Hebrew name is Miryam — she was a descendant of David, making YAHUSHA heir to the throne.",
        Some("👸"),
    ),
    FactRecord::from_static(
        "john-baptist-bridge",
        Insight,
        "John the Baptist (Yahuchanon) was the last of the old covenant prophets, bridging Torah and Messiah.",
        Some("🌉"),
    ),
    FactRecord::from_static(
        "young-disciples",
        History,
        "YAHUSHA's disciples were young men, mostly under 25 — this movement started with youth on fire.",
        Some("🔥"),
    ),
    FactRecord::from_static(
        "crucifixion-prophecy",
        Insight,
        "The Romans crucified YAHUSHA under political pressure — but prophecy said He would lay down His life willingly.",
        Some("✝️"),
    ),
    FactRecord::from_static(
        "resurrection-witnesses",
        History,
        "The resurrection was witnessed by over 500 people — it's historical, not myth.",
        Some("👁️"),
    ),
    FactRecord::from_static(
        "pentecost-shavuot",
        Translation,
        "Pentecost is actually Shavuot, a Hebrew feast celebrating both Torah and Spirit being given.",
        Some("🕊️"),
    ),
    FactRecord::from_static(
        "paul-shaul-return",
        Insight,
        "Paul (Sha'ul) never converted to a new religion — he returned to Torah through the revelation of YAHUSHA.",
        Some("🔄"),
    ),
    FactRecord::from_static(
        "new-creation-obedience",
        Insight,
        "The phrase \"new creation\" means reborn into obedience — not freedom from law, but freedom from sin.",
        Some("✨"),
    ),
    FactRecord::from_static(
        "revelation-hebrew-imagery",
        Insight,
        "Revelation is packed with Hebrew imagery — lamps, scrolls, beasts, and seals all trace back to Torah.",
        Some("📜"),
    ),
    FactRecord::from_static(
        "hundred-forty-four-thousand",
        Insight,
        "The 144,000 are not random — they're sealed from the twelve tribes of Israel, the covenant remnant.",
        Some("🔢"),
    ),
    FactRecord::from_static(
        "new-jerusalem-gates",
        Insight,
        "The New Jerusalem has twelve gates named after the tribes — there is no \"Gentile gate.\"",
        Some("🚪"),
    ),
    FactRecord::from_static(
        "every-tongue-confess",
        Insight,
        "In the end, every tongue will confess the true Name — YAHUAH is EL, and YAHUSHA is King.",
        Some("👑"),
    ),
];
